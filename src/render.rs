//! Table rendering for search and construct results.

use nerdyversary_expression::{Candidate, DAYS_PER_YEAR};
use nerdyversary_scan::Nerdyversary;

/// Column headers for the `search` table.
pub const SEARCH_HEADERS: [&str; 4] = ["Date", "Days", "Years", "Expression"];

/// Column headers for the `construct` table.
pub const CONSTRUCT_HEADERS: [&str; 3] = ["Days", "Years", "Expression"];

/// Output table format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFormat {
    /// Aligned columns under a dashed header rule.
    #[default]
    Simple,
    /// Markdown pipe table.
    Github,
    /// Comma-separated values, no alignment.
    Csv,
}

/// Field values for one scan hit: Date, Days, Years, Expression.
pub fn hit_fields(hit: &Nerdyversary) -> Vec<String> {
    let mut row = vec![hit.date().format("%-d. %b %Y").to_string()];
    row.extend(expression_fields(hit.expression()));
    row
}

/// Field values for one bare expression: Days, Years, Expression.
///
/// Days and Years are derived from the expression's own value, so the
/// row restates the approximation rather than the scanned day offset.
pub fn expression_fields(expression: &Candidate) -> Vec<String> {
    let years = expression.value();
    let days = (years * DAYS_PER_YEAR).round() as i64;
    vec![
        days.to_string(),
        format!("{years:.2}"),
        format!("${}$", expression.latex()),
    ]
}

/// Renders rows into a table string without a trailing newline.
pub fn render_table(headers: &[&str], rows: &[Vec<String>], format: TableFormat) -> String {
    match format {
        TableFormat::Simple => render_simple(headers, rows),
        TableFormat::Github => render_github(headers, rows),
        TableFormat::Csv => render_csv(headers, rows),
    }
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }
    widths
}

fn render_simple(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths = column_widths(headers, rows);
    let mut lines = Vec::with_capacity(rows.len() + 2);

    let pad_line = |cells: Vec<String>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    lines.push(pad_line(headers.iter().map(|h| h.to_string()).collect()));
    lines.push(pad_line(widths.iter().map(|w| "-".repeat(*w)).collect()));
    for row in rows {
        lines.push(pad_line(row.clone()));
    }
    lines.join("\n")
}

fn render_github(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths = column_widths(headers, rows);
    let mut lines = Vec::with_capacity(rows.len() + 2);

    let pipe_line = |cells: Vec<String>| -> String {
        let body = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ");
        format!("| {body} |")
    };

    lines.push(pipe_line(headers.iter().map(|h| h.to_string()).collect()));
    lines.push(pipe_line(widths.iter().map(|w| "-".repeat(*w)).collect()));
    for row in rows {
        lines.push(pipe_line(row.clone()));
    }
    lines.join("\n")
}

fn render_csv(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(headers.join(","));
    for row in rows {
        lines.push(row.join(","));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nerdyversary_expression::{Symbol, SymbolPower};

    fn two_pi_hit() -> Nerdyversary {
        let expression =
            Candidate::new(2, Some(SymbolPower::new(Symbol::Pi, 1).unwrap()), 1, None).unwrap();
        Nerdyversary::new(NaiveDate::from_ymd_opt(2022, 7, 12).unwrap(), expression)
    }

    fn compound_hit() -> Nerdyversary {
        let expression = Candidate::new(
            3,
            Some(SymbolPower::new(Symbol::Pi, 3).unwrap()),
            2,
            Some(SymbolPower::new(Symbol::E, 2).unwrap()),
        )
        .unwrap();
        Nerdyversary::new(NaiveDate::from_ymd_opt(2022, 7, 16).unwrap(), expression)
    }

    #[test]
    fn hit_fields_two_pi() {
        assert_eq!(
            hit_fields(&two_pi_hit()),
            ["12. Jul 2022", "2295", "6.28", r"$2 \pi$"]
        );
    }

    #[test]
    fn hit_fields_compound() {
        assert_eq!(
            hit_fields(&compound_hit()),
            ["16. Jul 2022", "2299", "6.29", r"$\frac{3 \pi^{3}}{2 e^{2}}$"]
        );
    }

    #[test]
    fn expression_fields_drop_the_date() {
        assert_eq!(
            expression_fields(two_pi_hit().expression()),
            ["2295", "6.28", r"$2 \pi$"]
        );
    }

    #[test]
    fn simple_table() {
        let rows = vec![hit_fields(&two_pi_hit())];
        let table = render_table(&SEARCH_HEADERS, &rows, TableFormat::Simple);
        assert_eq!(
            table,
            "Date          Days  Years  Expression\n\
             ------------  ----  -----  ----------\n\
             12. Jul 2022  2295  6.28   $2 \\pi$"
        );
    }

    #[test]
    fn github_table() {
        let rows = vec![hit_fields(&two_pi_hit())];
        let table = render_table(&SEARCH_HEADERS, &rows, TableFormat::Github);
        assert_eq!(
            table,
            "| Date         | Days | Years | Expression |\n\
             | ------------ | ---- | ----- | ---------- |\n\
             | 12. Jul 2022 | 2295 | 6.28  | $2 \\pi$    |"
        );
    }

    #[test]
    fn csv_table() {
        let rows = vec![hit_fields(&two_pi_hit())];
        let table = render_table(&SEARCH_HEADERS, &rows, TableFormat::Csv);
        assert_eq!(
            table,
            "Date,Days,Years,Expression\n12. Jul 2022,2295,6.28,$2 \\pi$"
        );
    }

    #[test]
    fn rendering_is_idempotent() {
        let rows = vec![hit_fields(&two_pi_hit()), hit_fields(&compound_hit())];
        for format in [TableFormat::Simple, TableFormat::Github, TableFormat::Csv] {
            let first = render_table(&SEARCH_HEADERS, &rows, format);
            let second = render_table(&SEARCH_HEADERS, &rows, format);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn empty_table_is_just_the_header() {
        let table = render_table(&CONSTRUCT_HEADERS, &[], TableFormat::Simple);
        assert_eq!(table, "Days  Years  Expression\n----  -----  ----------");
    }
}
