use super::compare::Comparison;

const OBTAINED_HEADER: &str = "Obtido";
const EXPECTED_HEADER: &str = "Esperado";
const MATCH_COLUMN_HEADER: &str = " Coincidem ";
const MATCH_MARK: &str = "     ✅     ";
const MISMATCH_MARK: &str = "     ❌     ";
const MISSING_LINE: &str = "N/D";
const BRANCH_PREFIX: &str = "    | ";
const ERRORS_TITLE: &str = "Os seguintes erros foram encontrados durante a execução:";

/// Renders the feedback for one test: verdict title, diff table and, when the
/// program wrote to stderr, a nested block with those messages.
///
/// The title verdict follows `comparison.passed`, so a table whose rows all
/// match can still be titled "Errado!" when the raw outputs differ.
pub fn render(test_index: u32, comparison: &Comparison, stderr_text: &str) -> String {
    let verdict = if comparison.passed { "Certo!" } else { "Errado!" };
    let title = format!("Teste {:02}: {}", test_index, verdict);
    let table = render_table(comparison);

    if stderr_text.is_empty() {
        tree(&title, &table)
    } else {
        let errors = tree(ERRORS_TITLE, stderr_text);
        tree(&title, &format!("{}\n\n{}", table, errors))
    }
}

fn render_table(comparison: &Comparison) -> String {
    let obtained_cells: Vec<&str> = comparison
        .rows
        .iter()
        .map(|r| r.obtained.as_deref().unwrap_or(MISSING_LINE))
        .collect();
    let expected_cells: Vec<&str> = comparison
        .rows
        .iter()
        .map(|r| r.expected.as_deref().unwrap_or(MISSING_LINE))
        .collect();

    let obtained_width = column_width(&obtained_cells, OBTAINED_HEADER);
    let expected_width = column_width(&expected_cells, EXPECTED_HEADER);

    let mut table = format!(
        "{}|{}|{}",
        center(OBTAINED_HEADER, obtained_width),
        center(EXPECTED_HEADER, expected_width),
        MATCH_COLUMN_HEADER,
    );
    for (row, (obtained, expected)) in comparison
        .rows
        .iter()
        .zip(obtained_cells.iter().zip(&expected_cells))
    {
        let mark = if row.matches() {
            MATCH_MARK
        } else {
            MISMATCH_MARK
        };
        table += &format!(
            "\n{}|{}|{}",
            center(obtained, obtained_width),
            center(expected, expected_width),
            mark,
        );
    }
    table
}

fn column_width(cells: &[&str], header: &str) -> usize {
    let longest = cells.iter().map(|s| s.chars().count()).max().unwrap_or(0);
    longest.max(header.chars().count()) + 2
}

fn center(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

/// Hangs `child` under `parent`, prefixing every line of `child` with the
/// tree branch marker. Composes for arbitrarily deep nesting.
fn tree(parent: &str, child: &str) -> String {
    let mut out = String::from(parent);
    for line in child.lines() {
        out.push('\n');
        out.push_str(BRANCH_PREFIX);
        out.push_str(line);
    }
    out
}
