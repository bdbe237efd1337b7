//! LaTeX fragment builders. Every function is pure: identical inputs yield
//! byte-identical output. Interpolated values are inserted verbatim, with no
//! escaping of LaTeX special characters; that is the caller's contract.

/// Article preamble with title, author, and date interpolated verbatim.
pub fn document_start(title: &str, author: &str, date: &str) -> String {
    let lines = [
        "\\documentclass[12pt]{article}".to_string(),
        "\\usepackage[utf8]{inputenc}".to_string(),
        "\\usepackage{graphicx}".to_string(),
        "\\usepackage{amsmath}".to_string(),
        "\\usepackage[a4paper,left=5mm,right=10mm,top=5mm,bottom=5mm]{geometry}".to_string(),
        String::new(),
        format!("\\title{{{title}}}"),
        format!("\\author{{{author}}}"),
        format!("\\date{{{date}}}"),
        String::new(),
        "\\begin{document}".to_string(),
        String::new(),
        "\\maketitle".to_string(),
        String::new(),
    ];
    lines.join("\n")
}

pub fn document_end() -> String {
    "\n\\end{document}".to_string()
}

/// Tabular block sized to the widest row; shorter rows are padded with empty
/// cells so every row renders with the same column count. Columns are
/// separated by vertical bars, rows by `\hline`.
///
/// Precondition: `rows` must be non-empty. The column-width computation has
/// no defined result for an empty table and this function panics on one.
pub fn latex_table(rows: &[Vec<String>]) -> String {
    let cols = rows
        .iter()
        .map(Vec::len)
        .max()
        .expect("latex_table requires at least one row");
    let spec = vec!["c"; cols].join(" | ");

    let body = rows
        .iter()
        .map(|row| {
            let mut cells = row.clone();
            cells.resize(cols, String::new());
            format!("{} \\\\", cells.join(" & "))
        })
        .collect::<Vec<_>>()
        .join(" \n\\hline\n");

    format!("\\begin{{tabular}} {{ {spec} }}\n{body}\n\\end{{tabular}}")
}

/// Image embed at the default scale of 1.0.
pub fn image(path: &str) -> String {
    image_with_scale(path, 1.0)
}

pub fn image_with_scale(path: &str, scale: f64) -> String {
    format!("\\includegraphics[scale={scale}]{{{path}}}\\\\")
}

/// Assembles the complete document. The fragment order is fixed: preamble,
/// table, blank line, image, closing.
pub fn report(
    title: &str,
    author: &str,
    date: &str,
    rows: &[Vec<String>],
    image_path: &str,
) -> String {
    [
        document_start(title, author, date),
        latex_table(rows),
        String::new(),
        image_with_scale(image_path, 0.2),
        document_end(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| cell.to_string()).collect()
    }

    #[test]
    fn document_start_interpolates_in_position() {
        let preamble = document_start("T", "A", "D");
        assert!(preamble.contains("\\title{T}"));
        assert!(preamble.contains("\\author{A}"));
        assert!(preamble.contains("\\date{D}"));
        assert!(preamble.starts_with("\\documentclass[12pt]{article}"));
    }

    #[test]
    fn document_start_is_pure() {
        assert_eq!(document_start("T", "A", "D"), document_start("T", "A", "D"));
    }

    #[test]
    fn table_pads_short_rows_to_uniform_width() {
        let table = latex_table(&[row(&["1", "2", "3"]), row(&["4", "5"])]);
        assert!(table.contains("{ c | c | c }"));
        assert!(table.contains("1 & 2 & 3 \\\\"));
        // The short row gains one empty trailing cell.
        assert!(table.contains("4 & 5 &  \\\\"));
        for line in table.lines().filter(|line| line.contains("\\\\")) {
            assert_eq!(line.matches(" & ").count(), 2, "non-uniform row: {line}");
        }
    }

    #[test]
    fn table_rows_are_separated_by_hline() {
        let table = latex_table(&[row(&["a"]), row(&["b"])]);
        assert_eq!(table.matches("\\hline").count(), 1);
    }

    #[test]
    fn image_defaults_to_unit_scale() {
        assert_eq!(image("graph.png"), "\\includegraphics[scale=1]{graph.png}\\\\");
        assert_eq!(
            image_with_scale("graph.png", 0.2),
            "\\includegraphics[scale=0.2]{graph.png}\\\\"
        );
    }

    #[test]
    fn report_assembles_fragments_in_fixed_order() {
        let text = report("T", "A", "D", &[row(&["1"])], "graph.png");
        let table_pos = text.find("\\begin{tabular}").unwrap();
        let image_pos = text.find("\\includegraphics").unwrap();
        let end_pos = text.find("\\end{document}").unwrap();
        assert!(table_pos < image_pos && image_pos < end_pos);
        assert!(text.ends_with("\\end{document}"));
    }
}
