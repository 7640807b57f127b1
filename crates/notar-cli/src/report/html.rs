//! HTML report rendering - one card per CNPJ.

use std::fmt::Write;

use notar_core::ReportRecord;

/// Render the full HTML document for a report run.
pub fn render(reports: &[ReportRecord]) -> String {
    let cards: String = reports.iter().map(render_card).collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="UTF-8">
  <title>Notas por CNPJ</title>
  <style>
    body {{
      font-family: Arial, sans-serif;
      margin: 20px;
      background: #f9f9f9;
    }}

    h2 {{
      color: #333;
      margin-top: 0px;
    }}

    .cnpj-card {{
      background: #fff;
      border: 1px solid #ccc;
      padding: 16px;
      margin-bottom: 20px;
      border-radius: 8px;
      box-shadow: 2px 2px 5px rgba(0,0,0,0.05);
    }}

    table {{
      width: 100%;
      border-collapse: collapse;
      margin-top: 10px;
    }}

    th, td {{
      padding: 8px 12px;
      border: 1px solid #ddd;
      text-align: left;
    }}

    th {{
      background-color: #f0f0f0;
    }}

    .total {{
      font-weight: bold;
      margin-top: 10px;
    }}

    .erros {{
      color: red;
      font-style: italic;
    }}
  </style>
</head>
<body>

  <h1>Relatório de Notas por CNPJ</h1>

  {cards}

</body>
</html>
"#
    )
}

fn render_card(report: &ReportRecord) -> String {
    let mut rows = String::new();
    for nota in &report.invoices {
        let _ = write!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&nota.document_number),
            nota.amount,
            escape(&nota.issue_date),
        );
    }

    let erros = if report.errors.is_empty() {
        String::new()
    } else {
        let sources: Vec<String> = report
            .errors
            .iter()
            .map(|erro| escape(&erro.source))
            .collect();
        format!(
            r#"<div class="erros">Documentos com erro: {}</div>"#,
            sources.join(", ")
        )
    };

    format!(
        r#"
    <div class="cnpj-card">
    <h2>CNPJ: {cnpj}</h2>
    <table>
      <thead>
        <tr>
          <th>Número da Nota</th>
          <th>Valor da Nota (R$)</th>
          <th>Data de Emissão</th>
        </tr>
      </thead>
      <tbody>
      {rows}
      </tbody>
    </table>
    <div class="total">Total: R$ {total}</div>
    {erros}
  </div>
    "#,
        cnpj = escape(&report.cnpj),
        rows = rows,
        total = report.total,
        erros = erros,
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
