use crate::support::{build_pipeline_or_exit, print_json};
use serde_json::json;

pub fn run(config: Option<String>, json_output: bool) {
    let pipeline = build_pipeline_or_exit(config.as_deref(), None);
    let names = pipeline.renderer_names();

    if json_output {
        print_json(&json!({
            "return_policy": pipeline.return_policy().to_string(),
            "renderers": names,
        }));
    } else {
        println!("tessera renderers (policy: {})", pipeline.return_policy());
        if names.is_empty() {
            println!("  (none)");
        }
        for (index, name) in names.iter().enumerate() {
            println!("  {index}. {name}");
        }
    }
}
