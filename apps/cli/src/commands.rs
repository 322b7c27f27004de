use anyhow::{Context, Result, bail};
use rgen_generator::{
    PlaceholderDeriver, Recipe, RecipeDefinition, Registration, Settings, append_rule_registration,
    template,
};
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tracing::{info, warn};

pub fn load_recipe(path: &Path) -> Result<Recipe> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read recipe {}", path.display()))?;
    let definition: RecipeDefinition =
        toml::from_str(&text).with_context(|| format!("Failed to parse recipe {}", path.display()))?;
    Recipe::try_from(definition).with_context(|| format!("Invalid recipe {}", path.display()))
}

pub fn variables(recipe: &Path, json: bool, settings: &Settings) -> Result<()> {
    let recipe = load_recipe(recipe)?;
    let placeholders = PlaceholderDeriver::new(&settings.registration.fqn_pattern).derive(&recipe);

    let mut out = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &placeholders)?;
        writeln!(out)?;
    } else {
        for (placeholder, value) in placeholders.iter() {
            writeln!(out, "{} = {value}", placeholder.token())?;
        }
    }

    Ok(())
}

pub fn render(recipe: &Path, template_path: &Path, output: Option<&Path>, settings: &Settings) -> Result<()> {
    let recipe = load_recipe(recipe)?;
    let placeholders = PlaceholderDeriver::new(&settings.registration.fqn_pattern).derive(&recipe);

    let text = fs::read_to_string(template_path)
        .with_context(|| format!("Failed to read template {}", template_path.display()))?;
    let rendered = template::render(&text, &placeholders);

    let unresolved = template::unresolved_tokens(&rendered);
    if !unresolved.is_empty() {
        let tokens = unresolved.iter().map(|p| p.token()).collect::<Vec<_>>().join(", ");
        warn!(template = %template_path.display(), tokens = %tokens, "Template kept placeholders without values");
    }

    match output {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Template rendered");
        },
        None => std::io::stdout().lock().write_all(rendered.as_bytes())?,
    }

    Ok(())
}

pub fn register(
    recipe: &Path,
    set_file: Option<&Path>,
    fqn_pattern: Option<&str>,
    settings: &Settings,
) -> Result<()> {
    let Some(set_file) = set_file.or(settings.registration.set_file.as_deref()) else {
        bail!("No set file given; pass --set-file or configure registration.set_file");
    };
    let deriver = PlaceholderDeriver::new(fqn_pattern.unwrap_or(&settings.registration.fqn_pattern));

    let recipe = load_recipe(recipe)?;
    let placeholders = deriver.derive(&recipe);
    let rule = deriver.rule_fqn(&placeholders);

    let outcome = append_rule_registration(set_file, &placeholders, deriver.fqn_pattern())?;
    let mut out = std::io::stdout().lock();
    match outcome {
        Registration::Added => writeln!(out, "Registered {rule} in {}", set_file.display())?,
        Registration::AlreadyPresent => {
            writeln!(out, "{rule} is already registered in {}", set_file.display())?;
        },
    }

    Ok(())
}
