use crate::config::FillConfig;
use crate::core::expand_reserved_keys;
use crate::data::load_extracted;
use crate::error::{FillError, FillResult};
use crate::types::Layout;
use crate::workflow::{
    detect_template, fill_excel_template, find_template_file, output_file_name, template_headers,
};
use chrono::Local;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Execute the fill command
pub fn fill(
    data_file: PathBuf,
    template: Option<PathBuf>,
    dir: Option<PathBuf>,
    output: Option<PathBuf>,
    synonyms: Option<PathBuf>,
    verbose: bool,
) -> FillResult<()> {
    println!("{}", "📝 Enquiry Fill - Populating template".bold().green());
    println!("   Data: {}", data_file.display());

    let template = match template {
        Some(path) => path,
        None => {
            let search_dir = dir.unwrap_or_else(|| parent_dir(&data_file));
            find_template_file(&search_dir)?
                .ok_or_else(|| FillError::TemplateNotFound(search_dir.join("*Format*.xlsx")))?
        }
    };
    let output = output.unwrap_or_else(|| {
        parent_dir(&template).join(output_file_name(&data_file, Local::now().naive_local()))
    });

    println!("   Template: {}", template.display());
    println!("   Output:   {}\n", output.display());

    let config = FillConfig::load(synonyms.as_deref())?;
    let matcher = config.matcher();

    if verbose {
        println!("{}", "📖 Reading extracted data...".cyan());
    }
    let mut data = load_extracted(&data_file)?;
    if verbose {
        println!(
            "   Found {} keys, {} systems\n",
            data.len(),
            data.systems().len()
        );
    }

    let report = fill_excel_template(&template, &output, &mut data, &matcher)?;

    println!("   Layout: {}", report.layout.to_string().bright_blue().bold());
    if report.filled == 0 {
        println!(
            "{}",
            "⚠️  No fields were filled - check the data keys against the template labels"
                .yellow()
        );
    } else {
        println!(
            "{} {} cells populated",
            "✅".green(),
            report.filled.to_string().bold()
        );
    }
    println!("   Saved: {}\n", output.display());

    Ok(())
}

/// Execute the detect command
pub fn detect(template: PathBuf) -> FillResult<()> {
    println!("{}", "🔍 Enquiry Fill - Layout Detection".bold().green());
    println!("   Template: {}\n", template.display());

    let layout = detect_template(&template)?;

    println!("   Layout: {}", layout.to_string().bright_blue().bold());
    match layout {
        Layout::MultiColumn { header_row } => println!("   Header row: {}", header_row),
        Layout::Vertical => println!("   Labels in column A, values in column B"),
        Layout::Horizontal => println!("   {}", "Unrecognized layout - filled as vertical".yellow()),
    }
    println!();

    Ok(())
}

/// Execute the headers command
pub fn headers(template: PathBuf) -> FillResult<()> {
    println!("{}", "📋 Enquiry Fill - Template Headers".bold().green());
    println!("   Template: {}\n", template.display());

    let headers = template_headers(&template)?;
    if headers.is_empty() {
        println!("   {}", "No header row found in the first 10 rows".yellow());
    } else {
        for (idx, header) in headers.iter().enumerate() {
            println!("   {:>2}. {}", idx + 1, header.cyan());
        }
    }
    println!();

    Ok(())
}

/// Execute the match command - show which data key a label resolves to
pub fn match_label(label: String, data_file: PathBuf, synonyms: Option<PathBuf>) -> FillResult<()> {
    println!("{}", "🔗 Enquiry Fill - Label Match".bold().green());
    println!("   Label: {}", label.bright_blue().bold());
    println!("   Data:  {}\n", data_file.display());

    let matcher = FillConfig::load(synonyms.as_deref())?.matcher();
    let mut data = load_extracted(&data_file)?;
    expand_reserved_keys(&mut data);
    let keys = data.keys();

    match matcher.find_match(&label, &keys) {
        Some(found) => {
            println!("   Key:      {}", found.key.green().bold());
            println!("   Strategy: {}", found.strategy.to_string().cyan());
        }
        None => println!("   {}", "No matching key".yellow()),
    }
    println!();

    Ok(())
}

/// Execute the synonyms command - list the table and flag duplicate patterns
pub fn synonyms(synonyms: Option<PathBuf>) -> FillResult<()> {
    println!("{}", "📚 Enquiry Fill - Synonym Table".bold().green());
    if let Some(ref path) = synonyms {
        println!("   File: {}", path.display());
    } else {
        println!("   Built-in table");
    }
    println!();

    let config = FillConfig::load(synonyms.as_deref())?;
    let table = &config.synonyms;
    for entry in table.entries() {
        println!(
            "   {} → {}",
            entry.pattern.bright_blue(),
            entry.candidates.join(", ")
        );
    }
    println!("\n   {} entries", table.len());

    let duplicates = table.duplicate_patterns();
    if !duplicates.is_empty() {
        println!(
            "   {} Duplicate patterns (first declaration wins): {}",
            "⚠️".yellow(),
            duplicates.join(", ").yellow()
        );
    }
    println!();

    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
