use crate::support::{build_pipeline_or_exit, print_json};
use serde_json::{Value, json};
use tessera_kernel::{Content, RawEntity, RenderOutcome, normalize};

pub struct Args {
    pub content: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub policy: Option<String>,
    pub config: Option<String>,
    pub json: bool,
}

pub fn run(args: Args) {
    let pipeline = build_pipeline_or_exit(args.config.as_deref(), args.policy.as_deref());

    let content = serde_json::from_str::<Value>(&args.content)
        .unwrap_or_else(|_| Value::String(args.content.clone()));
    let class_name = (!args.classes.is_empty())
        .then(|| Value::Array(args.classes.into_iter().map(Value::String).collect()));
    let raw = RawEntity {
        content: Some(Content::Data(content)),
        id: args.id.map(Value::String),
        class_name,
    };

    let entity = normalize(Some(raw)).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });
    let outcome = pipeline.render(&entity).unwrap_or_else(|e| {
        eprintln!("error: renderer failed: {e}");
        std::process::exit(1);
    });

    if args.json {
        let payload = match &outcome {
            RenderOutcome::Rendered(node) => json!({
                "outcome": "rendered",
                "policy": pipeline.return_policy().to_string(),
                "node": node,
            }),
            RenderOutcome::NoMatch => json!({
                "outcome": "no_match",
                "policy": pipeline.return_policy().to_string(),
            }),
        };
        print_json(&payload);
    } else {
        match outcome {
            RenderOutcome::Rendered(node) => print!("{}", terminated(node.text_content())),
            RenderOutcome::NoMatch => println!("no match"),
        }
    }
}

fn terminated(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
