//! List command implementation
//!
//! Prints a table of the spyces of a file: section, name, type, line range and size.
//! With `--lines` every block is followed by its numbered lines.

use console::Style;
use serde::Serialize;

use spyce::curry::{Curry, SpyceItem};
use spyce::error::Result;
use spyce::filter::filtered_keys;

use crate::cli::ListArgs;

const HEADER: [&str; 5] = ["section", "name", "type", "lines", "size"];

/// Run list command
pub fn run(args: ListArgs) -> Result<()> {
    let curry = Curry::open(&args.input)?;
    let items = selected_items(&curry, &args);
    if args.json {
        println!("{}", render_json(&curry, &items)?);
    } else {
        print!("{}", render_table(&curry, &items, args.lines, !args.no_header));
    }
    Ok(())
}

fn selected_items<'a>(curry: &'a Curry, args: &ListArgs) -> Vec<&'a SpyceItem> {
    filtered_keys(curry, &args.filters)
        .iter()
        .filter_map(|key| curry.item(key))
        .collect()
}

/// One listed spyce
#[derive(Debug, Serialize)]
struct Row {
    section: String,
    name: String,
    #[serde(rename = "type")]
    spyce_type: String,
    start: usize,
    end: usize,
    size: usize,
}

impl Row {
    fn new(curry: &Curry, item: &SpyceItem) -> Self {
        Self {
            section: item.section().to_string(),
            name: item.name().to_string(),
            spyce_type: item.spyce_type().to_string(),
            start: item.start() + 1,
            end: item.end(),
            size: block_size(curry, item),
        }
    }

    fn cells(&self) -> [String; 5] {
        [
            self.section.clone(),
            self.name.clone(),
            self.spyce_type.clone(),
            format!("{}:{}", self.start, self.end),
            self.size.to_string(),
        ]
    }
}

/// Number of characters of the block, markers included
fn block_size(curry: &Curry, item: &SpyceItem) -> usize {
    curry
        .block_lines(item)
        .iter()
        .map(|line| line.chars().count())
        .sum()
}

fn render_json(curry: &Curry, items: &[&SpyceItem]) -> Result<String> {
    let rows: Vec<Row> = items.iter().map(|item| Row::new(curry, item)).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

fn render_table(curry: &Curry, items: &[&SpyceItem], show_lines: bool, show_header: bool) -> String {
    if items.is_empty() {
        return String::new();
    }
    let rows: Vec<[String; 5]> = items
        .iter()
        .map(|item| Row::new(curry, item).cells())
        .collect();

    let mut widths = [0usize; 5];
    let header_cells = HEADER.map(str::to_string);
    for cells in rows
        .iter()
        .chain(show_header.then_some(&header_cells).into_iter())
    {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    if show_header {
        let bold = Style::new().bold();
        let header: Vec<String> = header_cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| bold.apply_to(format!("{:width$}", cell)).to_string())
            .collect();
        push_row(&mut out, &header);
        let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
        push_row(&mut out, &rule);
    }

    let name_style = Style::new().yellow();
    let dim = Style::new().dim();
    for (item, cells) in items.iter().zip(&rows) {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, width))| {
                let cell = format!("{:width$}", cell);
                if i == 1 {
                    name_style.apply_to(cell).to_string()
                } else {
                    cell
                }
            })
            .collect();
        push_row(&mut out, &padded);
        if show_lines {
            for (offset, line) in curry.block_lines(item).iter().enumerate() {
                let line_no = item.start() + offset + 1;
                out.push_str(&format!(
                    "  {} {}\n",
                    dim.apply_to(format!("{:<6}", line_no)),
                    line.trim_end()
                ));
            }
        }
    }
    out
}

fn push_row(out: &mut String, cells: &[String]) {
    out.push_str(cells.join(" ").trim_end());
    out.push('\n');
}
