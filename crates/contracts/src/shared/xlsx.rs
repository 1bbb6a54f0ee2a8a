//! Минимальный писатель XLSX (Office Open XML) на один лист.
//!
//! Все ячейки пишутся как inline-строки, ширина колонок задаётся явно.
//! Пакет собирается через `zip`, поэтому работает и в wasm.

use std::io::{Cursor, Write};
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const MAX_SHEET_NAME_LEN: usize = 31;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to build xlsx package: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Failed to write xlsx part: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait для типов, которые могут быть экспортированы в Excel
pub trait ExcelExportable {
    /// Возвращает массив заголовков колонок
    fn headers() -> Vec<&'static str>;

    /// Значения строки в порядке заголовков
    fn to_row(&self) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Worksheet {
    pub fn from_items<T: ExcelExportable>(name: &str, items: &[T]) -> Self {
        Self {
            name: sanitize_sheet_name(name),
            headers: T::headers().into_iter().map(str::to_string).collect(),
            rows: items.iter().map(ExcelExportable::to_row).collect(),
        }
    }

    /// Column widths in characters: never narrower than the header.
    pub fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell.chars().count())
                    .fold(header.chars().count(), usize::max)
            })
            .collect()
    }

    /// Serialize the sheet into an `.xlsx` package.
    pub fn to_xlsx(&self) -> Result<Vec<u8>, ExportError> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        let parts = [
            ("[Content_Types].xml", CONTENT_TYPES.to_string()),
            ("_rels/.rels", ROOT_RELS.to_string()),
            ("xl/workbook.xml", self.workbook_xml()),
            ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS.to_string()),
            ("xl/worksheets/sheet1.xml", self.sheet_xml()),
        ];

        for (name, body) in parts {
            zip.start_file(name, options)?;
            zip.write_all(body.as_bytes())?;
        }

        Ok(zip.finish()?.into_inner())
    }

    fn workbook_xml(&self) -> String {
        format!(
            "{XML_DECL}<workbook xmlns=\"{NS_MAIN}\" xmlns:r=\"{NS_REL}\">\
             <sheets><sheet name=\"{}\" sheetId=\"1\" r:id=\"rId1\"/></sheets></workbook>",
            escape_xml(&self.name)
        )
    }

    fn sheet_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str(XML_DECL);
        xml.push_str(&format!("<worksheet xmlns=\"{NS_MAIN}\">"));

        let widths = self.column_widths();
        if !widths.is_empty() {
            xml.push_str("<cols>");
            for (idx, width) in widths.iter().enumerate() {
                let n = idx + 1;
                xml.push_str(&format!(
                    "<col min=\"{n}\" max=\"{n}\" width=\"{width}\" customWidth=\"1\"/>"
                ));
            }
            xml.push_str("</cols>");
        }

        xml.push_str("<sheetData>");
        push_row(&mut xml, 1, &self.headers);
        for (idx, row) in self.rows.iter().enumerate() {
            push_row(&mut xml, idx + 2, row);
        }
        xml.push_str("</sheetData></worksheet>");
        xml
    }
}

fn push_row(xml: &mut String, row_num: usize, cells: &[String]) {
    xml.push_str(&format!("<row r=\"{row_num}\">"));
    for (col, value) in cells.iter().enumerate() {
        xml.push_str(&format!(
            "<c r=\"{}{row_num}\" t=\"inlineStr\"><is><t xml:space=\"preserve\">{}</t></is></c>",
            column_letter(col),
            escape_xml(value)
        ));
    }
    xml.push_str("</row>");
}

/// 0 -> A, 25 -> Z, 26 -> AA
pub fn column_letter(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Excel: не длиннее 31 символа и без `[]:*?/\`
pub fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        .take(MAX_SHEET_NAME_LEN)
        .collect();
    let trimmed = cleaned.trim().trim_matches('\'');
    if trimmed.is_empty() {
        "Sheet1".to_string()
    } else {
        trimmed.to_string()
    }
}

fn escape_xml(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            // управляющие символы недопустимы в XML 1.0
            '\t' | '\n' | '\r' => out.push(ch),
            c if (c as u32) < 0x20 => {}
            c => out.push(c),
        }
    }
    out
}

const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n";
const NS_MAIN: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const NS_REL: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

const CONTENT_TYPES: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
<Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
<Default Extension=\"xml\" ContentType=\"application/xml\"/>\
<Override PartName=\"/xl/workbook.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml\"/>\
<Override PartName=\"/xl/worksheets/sheet1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml\"/>\
</Types>";

const ROOT_RELS: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument\" Target=\"xl/workbook.xml\"/>\
</Relationships>";

const WORKBOOK_RELS: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet\" Target=\"worksheets/sheet1.xml\"/>\
</Relationships>";

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    struct Pair(&'static str, &'static str);

    impl ExcelExportable for Pair {
        fn headers() -> Vec<&'static str> {
            vec!["Key", "Description"]
        }

        fn to_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut out = String::new();
        file.read_to_string(&mut out).unwrap();
        out
    }

    #[test]
    fn test_column_letter() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(8), "I");
        assert_eq!(column_letter(25), "Z");
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(701), "ZZ");
        assert_eq!(column_letter(702), "AAA");
    }

    #[test]
    fn test_sanitize_sheet_name() {
        assert_eq!(sanitize_sheet_name("Stock"), "Stock");
        assert_eq!(sanitize_sheet_name("a/b[c]"), "abc");
        assert_eq!(sanitize_sheet_name("???"), "Sheet1");
        assert_eq!(sanitize_sheet_name(&"x".repeat(40)).len(), 31);
    }

    #[test]
    fn test_column_widths_cover_header() {
        let sheet = Worksheet::from_items("Stock", &[Pair("K1", "a much longer description")]);
        assert_eq!(sheet.column_widths(), vec![3, 25]);

        let empty = Worksheet::from_items::<Pair>("Stock", &[]);
        assert_eq!(empty.column_widths(), vec![3, 11]);
    }

    #[test]
    fn test_package_contents() {
        let sheet = Worksheet::from_items("Stock", &[Pair("A&B", "<ok>"), Pair("Ünïcode", "x")]);
        let bytes = sheet.to_xlsx().unwrap();
        assert_eq!(&bytes[..2], b"PK");

        let workbook = read_part(&bytes, "xl/workbook.xml");
        assert!(workbook.contains("<sheet name=\"Stock\" sheetId=\"1\" r:id=\"rId1\"/>"));

        let xml = read_part(&bytes, "xl/worksheets/sheet1.xml");
        assert!(xml.contains("<c r=\"A1\" t=\"inlineStr\"><is><t xml:space=\"preserve\">Key</t></is></c>"));
        assert!(xml.contains(">A&amp;B<"));
        assert!(xml.contains(">&lt;ok&gt;<"));
        assert!(xml.contains(">Ünïcode<"));
        assert!(xml.contains("<row r=\"3\">"));
        assert!(xml.contains("<col min=\"1\" max=\"1\" width=\"7\" customWidth=\"1\"/>"));

        let types = read_part(&bytes, "[Content_Types].xml");
        assert!(types.contains("/xl/worksheets/sheet1.xml"));
        read_part(&bytes, "_rels/.rels");
        read_part(&bytes, "xl/_rels/workbook.xml.rels");
    }

    #[test]
    fn test_escape_drops_control_chars() {
        assert_eq!(escape_xml("a\u{1}b\tc"), "ab\tc");
        assert_eq!(escape_xml("it's \"q\""), "it&apos;s &quot;q&quot;");
    }
}
