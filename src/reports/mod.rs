use cipherforge::alphabet::{symbol, LetterSequence};
use cipherforge::api::{KeyLengthReport, RecoveryReport, RepeatReport};
use cipherforge::error::CfResult;
use cipherforge::frequency::FrequencyTable;
use cipherforge::keylength::{top_n, KeyLengthCandidate};
use clap::ValueEnum;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

const TOP_CANDIDATES: usize = 5;
const WRAP: usize = 60;

pub fn emit_json<T: Serialize>(value: &T) -> CfResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_ic_summary(overall_ic: f64, random_ic: f64, reference_ic: f64) {
    println!("\nOverall IC: {:.4}", overall_ic);
    println!(
        "Reference: random ≈ {:.3}, language ≈ {:.3}",
        random_ic, reference_ic
    );
}

pub fn print_ranking(title: &str, score_label: &str, ranking: &[KeyLengthCandidate], precision: usize) {
    println!("\n{}", title);
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Length").add_attribute(Attribute::Bold),
        Cell::new(score_label).fg(Color::Cyan),
    ]);
    for (i, c) in ranking.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(c.length),
            Cell::new(format!("{:.*}", precision, c.score)),
        ]);
    }
    align_right(&mut table, 0..=2);
    println!("{}", table);
}

pub fn print_top_candidates(ranking: &[KeyLengthCandidate], precision: usize) {
    println!("\nTop candidates:");
    for c in top_n(ranking, TOP_CANDIDATES) {
        println!("  {:>2}: {:.*}", c.length, precision, c.score);
    }
}

pub fn print_repeats(report: &RepeatReport) {
    if report.repeats.is_empty() {
        println!("\nNo repeated substrings found.");
        return;
    }

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Substring").add_attribute(Attribute::Bold),
        Cell::new("Len"),
        Cell::new("Count"),
        Cell::new("Positions (1-based)"),
        Cell::new("Spacings").fg(Color::Green),
    ]);
    for r in &report.repeats {
        let positions: Vec<String> = r.positions.iter().map(|p| (p + 1).to_string()).collect();
        let spacings: Vec<String> = r.spacings.iter().map(|s| s.to_string()).collect();
        table.add_row(vec![
            Cell::new(&r.substring).add_attribute(Attribute::Bold),
            Cell::new(r.substring.len()),
            Cell::new(r.positions.len()),
            Cell::new(positions.join(", ")),
            Cell::new(spacings.join(", ")),
        ]);
    }
    align_right(&mut table, 1..=2);
    println!("\n{}", table);
    println!("Total different repeated substrings: {}", report.repeats.len());
}

pub fn print_comparison(report: &KeyLengthReport) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Length").add_attribute(Attribute::Bold),
        Cell::new("Avg IC").fg(Color::Cyan),
        Cell::new("IC Rank"),
        Cell::new("Spacing Score").fg(Color::Green),
        Cell::new("Spacing Rank"),
    ]);

    let opt_f = |v: Option<f64>, p: usize| v.map_or("-".to_string(), |x| format!("{:.*}", p, x));
    let opt_u = |v: Option<usize>| v.map_or("-".to_string(), |x| x.to_string());

    for row in &report.comparison {
        let mut ic_cell = Cell::new(opt_f(row.ic_score, 4));
        if row.ic_rank == Some(1) {
            ic_cell = ic_cell.add_attribute(Attribute::Bold);
        }
        let mut sp_cell = Cell::new(opt_f(row.spacing_score, 0));
        if row.spacing_rank == Some(1) {
            sp_cell = sp_cell.add_attribute(Attribute::Bold);
        }
        table.add_row(vec![
            Cell::new(row.length),
            ic_cell,
            Cell::new(opt_u(row.ic_rank)),
            sp_cell,
            Cell::new(opt_u(row.spacing_rank)),
        ]);
    }
    align_right(&mut table, 0..=4);
    println!("\n{}", table);
}

pub fn print_recovery(report: &RecoveryReport) {
    println!("\nMost likely key letters by position:");
    let mut table = new_table();
    let mut header = vec![
        Cell::new("Pos").add_attribute(Attribute::Bold),
        Cell::new("Best").fg(Color::Cyan),
    ];
    let alt_count = report.positions.first().map_or(0, |p| p.len());
    for i in 1..=alt_count {
        header.push(Cell::new(format!("#{} (chi2)", i)));
    }
    table.set_header(header);

    for (pos, alts) in report.positions.iter().enumerate() {
        let mut row = vec![Cell::new(pos + 1)];
        match alts.first() {
            Some(best) => row.push(Cell::new(best.letter).fg(Color::Cyan)),
            None => row.push(Cell::new("?")),
        }
        for c in alts {
            row.push(Cell::new(format!("{} ({:.2})", c.letter, c.chi_squared)));
        }
        table.add_row(row);
    }
    println!("{}", table);

    println!("\nKey guess: {}", report.key);
    println!("Total chi-squared: {:.2}", report.total_chi_squared);
    print_text("Plaintext with key guess", &report.plaintext);
}

pub fn print_text(label: &str, text: &LetterSequence) {
    println!("\n{}:\n", label);
    let s = text.to_string();
    let bytes = s.as_bytes();
    for chunk in bytes.chunks(WRAP) {
        println!("{}", String::from_utf8_lossy(chunk));
    }
}

pub fn print_frequency_table(table_data: &FrequencyTable) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Letter").add_attribute(Attribute::Bold),
        Cell::new("Weight").fg(Color::Cyan),
    ]);
    for (i, w) in table_data.weights().iter().enumerate() {
        table.add_row(vec![Cell::new(symbol(i as u8)), Cell::new(format!("{:.5}", w))]);
    }
    align_right(&mut table, 1..=1);
    println!("{}", table);
    println!("Expected IC: {:.4}", table_data.expected_ic());
}
