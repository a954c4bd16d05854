use clap::Parser;
use katachi::prelude::*;
use std::path::Path;

/// A recipe-driven form rendering and answer resolution CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the recipe property list
    recipe_path: String,

    /// Optional path to a JSON file of submitted form data.
    /// When given, the submission is resolved instead of rendering the form.
    data_path: Option<String>,

    /// Optional path to a JSON file with the valid target groups
    #[arg(short, long)]
    groups: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let recipe_path = Path::new(&cli.recipe_path);
    let base_dir = recipe_path.parent().unwrap_or_else(|| Path::new("."));
    let name = recipe_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_else(|| exit_with_error("Recipe path has no file name."));

    let loader = RecipeLoader::new(base_dir);
    let recipe = loader
        .load(name)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load recipe: {}", e)));

    println!(
        "Loaded recipe '{}' (version {}), {} declared outputs.\n",
        recipe.display_name,
        recipe.version,
        recipe.outputs.len()
    );

    match cli.data_path {
        Some(data_path) => run_resolve(&recipe, &data_path),
        None => run_render(&recipe, cli.groups.as_deref()),
    }
}

/// Renders the fresh form markup to stdout.
fn run_render(recipe: &Recipe, groups_path: Option<&str>) {
    let groups = match groups_path {
        Some(path) => GroupConfig::from_file(path)
            .unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to load group config '{}': {}", path, e))
            })
            .groups,
        None => {
            println!("No group config provided. Using a placeholder group list.");
            vec!["default".to_string()]
        }
    };

    let html = FormRenderer::new(recipe, &groups).render();
    println!("{}", html);
}

/// Resolves submitted data and prints the payload document.
fn run_resolve(recipe: &Recipe, data_path: &str) {
    let data = FormData::from_file(data_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load submitted data from '{}': {}",
            data_path, e
        ))
    });

    let submission = resolve_submission(recipe, &data);

    println!("Resolved answers:");
    for (key, _) in &recipe.outputs {
        match submission.answers.get(key) {
            Some(Some(value)) => println!("  {} = {}", key, value),
            _ => println!("  {} = <absent>", key),
        }
    }

    println!("\n{}", submission.document);
    let xml = submission
        .document
        .to_xml()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize document: {}", e)));
    println!("\n{}", xml);
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
