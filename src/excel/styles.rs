//! Template formatting read straight from the .xlsx package
//!
//! calamine only exposes values and formulas. Cell formats, merged ranges,
//! column widths and row heights are read from the OOXML parts
//! (`xl/styles.xml` and each worksheet part) so they can be written back
//! around the filled values.

use crate::error::{FillError, FillResult};
use crate::template::{CellRange, ColumnSpan, RowFormat, SheetLayout};
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Decoder, Reader as XmlReader};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use zip::result::ZipError;
use zip::ZipArchive;

/// Number format ids below this are Excel built-ins
const FIRST_CUSTOM_NUM_FORMAT: u32 = 164;
/// Last column Excel addresses (XFD)
const MAX_COLUMN: u32 = 16_384;

// Stored column widths include font padding, which rust_xlsxwriter adds back
const CALIBRI_WIDTH_PADDING: f64 = 0.83203125;
const ALT_WIDTH_PADDING: f64 = 0.7109375;
const WIDTH_TOLERANCE: f64 = 0.0005;

//==============================================================================
// Style Model
//==============================================================================

/// Number format of a cell style
#[derive(Debug, Clone, Default, PartialEq)]
pub enum NumFormat {
    #[default]
    General,
    /// Excel built-in format id (e.g. 14 for a short date)
    Builtin(u8),
    /// Custom format code such as `yyyy-mm-dd`
    Custom(String),
}

impl NumFormat {
    fn from_id(id: u32, custom: &HashMap<u32, String>) -> Self {
        if let Some(code) = custom.get(&id) {
            return NumFormat::Custom(code.clone());
        }
        match u8::try_from(id) {
            Ok(0) => NumFormat::General,
            Ok(id) if u32::from(id) < FIRST_CUSTOM_NUM_FORMAT => NumFormat::Builtin(id),
            _ => NumFormat::General,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontStyle {
    pub name: Option<String>,
    pub size: Option<f64>,
    /// `0xRRGGBB`; theme and indexed colors are not carried
    pub color: Option<u32>,
    pub bold: bool,
    pub italic: bool,
    pub strike: bool,
    /// OOXML underline kind (`single`, `double`, ...)
    pub underline: Option<String>,
}

/// OOXML border style names per side, `None` for no border
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BorderStyle {
    pub left: Option<String>,
    pub right: Option<String>,
    pub top: Option<String>,
    pub bottom: Option<String>,
}

/// One entry of the workbook's cell format table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellStyle {
    pub num_format: NumFormat,
    pub font: FontStyle,
    /// Solid fill color, `0xRRGGBB`
    pub fill: Option<u32>,
    pub border: BorderStyle,
    pub horizontal: Option<String>,
    pub vertical: Option<String>,
    pub wrap: bool,
}

/// The workbook's cell format table, indexed by a cell's style id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    styles: Vec<CellStyle>,
}

impl StyleSheet {
    pub fn new(styles: Vec<CellStyle>) -> Self {
        Self { styles }
    }

    pub fn get(&self, style_id: u32) -> Option<&CellStyle> {
        self.styles.get(style_id as usize)
    }

    pub fn entries(&self) -> &[CellStyle] {
        &self.styles
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Parse `xl/styles.xml`
    pub fn parse(xml: &str) -> FillResult<Self> {
        let mut reader = XmlReader::from_str(xml);
        reader.config_mut().trim_text(true);
        let decoder = reader.decoder();
        let mut parts = StyleParts::default();

        loop {
            match reader
                .read_event()
                .map_err(|e| xml_error("xl/styles.xml", e))?
            {
                Event::Start(e) => match Section::opened_by(e.local_name().as_ref()) {
                    Some(section) => parts.section = section,
                    None => parts.element(&e, decoder),
                },
                Event::Empty(e) => parts.element(&e, decoder),
                Event::End(e) => {
                    if Section::opened_by(e.local_name().as_ref()).is_some() {
                        parts.section = Section::Other;
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(parts.finish())
    }
}

//==============================================================================
// styles.xml
//==============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Section {
    #[default]
    Other,
    NumFmts,
    Fonts,
    Fills,
    Borders,
    CellXfs,
}

impl Section {
    fn opened_by(tag: &[u8]) -> Option<Self> {
        match tag {
            b"numFmts" => Some(Section::NumFmts),
            b"fonts" => Some(Section::Fonts),
            b"fills" => Some(Section::Fills),
            b"borders" => Some(Section::Borders),
            b"cellXfs" => Some(Section::CellXfs),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct RawXf {
    num_fmt: u32,
    font: usize,
    fill: usize,
    border: usize,
    horizontal: Option<String>,
    vertical: Option<String>,
    wrap: bool,
}

#[derive(Debug, Default)]
struct StyleParts {
    section: Section,
    num_formats: HashMap<u32, String>,
    fonts: Vec<FontStyle>,
    fills: Vec<Option<u32>>,
    solid_fill: bool,
    borders: Vec<BorderStyle>,
    xfs: Vec<RawXf>,
}

impl StyleParts {
    fn element(&mut self, e: &BytesStart<'_>, decoder: Decoder) {
        let value = |key: &[u8]| attr(e, key, decoder);
        let name = e.local_name();

        match (self.section, name.as_ref()) {
            (Section::NumFmts, b"numFmt") => {
                if let (Some(id), Some(code)) = (num(value(b"numFmtId")), value(b"formatCode")) {
                    self.num_formats.insert(id, code);
                }
            }
            (Section::Fonts, b"font") => self.fonts.push(FontStyle::default()),
            (Section::Fonts, tag) => {
                let Some(font) = self.fonts.last_mut() else {
                    return;
                };
                match tag {
                    b"b" => font.bold = toggled(e, decoder),
                    b"i" => font.italic = toggled(e, decoder),
                    b"strike" => font.strike = toggled(e, decoder),
                    b"u" => {
                        let kind = value(b"val").unwrap_or_else(|| "single".to_string());
                        font.underline = (kind != "none").then_some(kind);
                    }
                    b"sz" => font.size = num(value(b"val")),
                    b"name" => font.name = value(b"val"),
                    b"color" => font.color = value(b"rgb").as_deref().and_then(parse_rgb),
                    _ => {}
                }
            }
            (Section::Fills, b"fill") => self.fills.push(None),
            (Section::Fills, b"patternFill") => {
                self.solid_fill = value(b"patternType").as_deref() == Some("solid");
            }
            (Section::Fills, b"fgColor") if self.solid_fill => {
                if let Some(fill) = self.fills.last_mut() {
                    *fill = value(b"rgb").as_deref().and_then(parse_rgb);
                }
            }
            (Section::Borders, b"border") => self.borders.push(BorderStyle::default()),
            (Section::Borders, side @ (b"left" | b"right" | b"top" | b"bottom")) => {
                let Some(border) = self.borders.last_mut() else {
                    return;
                };
                let style = value(b"style").filter(|s| s != "none");
                match side {
                    b"left" => border.left = style,
                    b"right" => border.right = style,
                    b"top" => border.top = style,
                    _ => border.bottom = style,
                }
            }
            (Section::CellXfs, b"xf") => self.xfs.push(RawXf {
                num_fmt: num(value(b"numFmtId")).unwrap_or(0),
                font: num(value(b"fontId")).unwrap_or(0),
                fill: num(value(b"fillId")).unwrap_or(0),
                border: num(value(b"borderId")).unwrap_or(0),
                ..RawXf::default()
            }),
            (Section::CellXfs, b"alignment") => {
                if let Some(xf) = self.xfs.last_mut() {
                    xf.horizontal = value(b"horizontal");
                    xf.vertical = value(b"vertical");
                    xf.wrap = is_true(value(b"wrapText"));
                }
            }
            _ => {}
        }
    }

    fn finish(self) -> StyleSheet {
        let styles = self
            .xfs
            .iter()
            .map(|xf| CellStyle {
                num_format: NumFormat::from_id(xf.num_fmt, &self.num_formats),
                font: self.fonts.get(xf.font).cloned().unwrap_or_default(),
                fill: self.fills.get(xf.fill).copied().flatten(),
                border: self.borders.get(xf.border).cloned().unwrap_or_default(),
                horizontal: xf.horizontal.clone(),
                vertical: xf.vertical.clone(),
                wrap: xf.wrap,
            })
            .collect();
        StyleSheet::new(styles)
    }
}

//==============================================================================
// Worksheet Parts
//==============================================================================

/// Parse merges, column widths, row heights and cell style ids of one
/// worksheet part
pub fn parse_sheet_layout(xml: &str) -> FillResult<SheetLayout> {
    let mut reader = XmlReader::from_str(xml);
    reader.config_mut().trim_text(true);
    let decoder = reader.decoder();
    let mut layout = SheetLayout::default();

    loop {
        match reader.read_event().map_err(|e| xml_error("worksheet", e))? {
            Event::Start(e) | Event::Empty(e) => read_layout_element(&mut layout, &e, decoder),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(layout)
}

fn read_layout_element(layout: &mut SheetLayout, e: &BytesStart<'_>, decoder: Decoder) {
    let value = |key: &[u8]| attr(e, key, decoder);

    match e.local_name().as_ref() {
        b"col" => {
            let (Some(first), Some(last)) = (num::<u32>(value(b"min")), num::<u32>(value(b"max")))
            else {
                return;
            };
            let width = num::<f64>(value(b"width")).map(strip_width_padding);
            let hidden = is_true(value(b"hidden"));
            if first >= 1 && (width.is_some() || hidden) {
                layout.columns.push(ColumnSpan {
                    first,
                    last: last.clamp(first, MAX_COLUMN),
                    width,
                    hidden,
                });
            }
        }
        b"row" => {
            let Some(row) = num::<u32>(value(b"r")) else {
                return;
            };
            // Without customHeight the stored height is only a cached auto-fit
            let height = num::<f64>(value(b"ht")).filter(|_| is_true(value(b"customHeight")));
            let hidden = is_true(value(b"hidden"));
            if height.is_some() || hidden {
                layout.rows.insert(row, RowFormat { height, hidden });
            }
        }
        b"c" => {
            let Some((row, col)) = value(b"r").as_deref().and_then(parse_cell_ref) else {
                return;
            };
            if let Some(style_id) = num::<u32>(value(b"s")).filter(|&s| s > 0) {
                layout.cell_styles.insert((row, col), style_id);
            }
        }
        b"mergeCell" => {
            if let Some(range) = value(b"ref").as_deref().and_then(parse_range) {
                layout.merged.push(range);
            }
        }
        _ => {}
    }
}

//==============================================================================
// Package
//==============================================================================

/// Formatting of a whole workbook: the style table plus each sheet's layout
#[derive(Debug, Default)]
pub struct PackageLayout {
    pub styles: StyleSheet,
    pub sheets: HashMap<String, SheetLayout>,
}

/// Read the style table and every worksheet's layout from an .xlsx file
pub fn read_package_layout(path: &Path) -> FillResult<PackageLayout> {
    let mut zip = ZipArchive::new(File::open(path)?).map_err(zip_error)?;

    let styles = match read_part(&mut zip, "xl/styles.xml")? {
        Some(xml) => StyleSheet::parse(&xml)?,
        None => StyleSheet::default(),
    };

    let workbook_xml = read_part(&mut zip, "xl/workbook.xml")?
        .ok_or_else(|| FillError::Excel("Workbook part xl/workbook.xml is missing".to_string()))?;
    let rels_xml = read_part(&mut zip, "xl/_rels/workbook.xml.rels")?.unwrap_or_default();
    let targets = parse_relationship_targets(&rels_xml)?;

    let mut sheets = HashMap::new();
    for (name, rel_id) in parse_sheet_rel_ids(&workbook_xml)? {
        let Some(target) = targets.get(&rel_id) else {
            continue;
        };
        if let Some(xml) = read_part(&mut zip, &part_path(target))? {
            sheets.insert(name, parse_sheet_layout(&xml)?);
        }
    }

    Ok(PackageLayout { styles, sheets })
}

fn read_part(zip: &mut ZipArchive<File>, name: &str) -> FillResult<Option<String>> {
    let mut part = match zip.by_name(name) {
        Ok(part) => part,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(zip_error(e)),
    };
    let mut xml = String::new();
    part.read_to_string(&mut xml)?;
    Ok(Some(xml))
}

/// `(sheet name, relationship id)` in workbook order
fn parse_sheet_rel_ids(xml: &str) -> FillResult<Vec<(String, String)>> {
    let mut reader = XmlReader::from_str(xml);
    reader.config_mut().trim_text(true);
    let decoder = reader.decoder();
    let mut sheets = Vec::new();

    loop {
        match reader
            .read_event()
            .map_err(|e| xml_error("xl/workbook.xml", e))?
        {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"sheet" => {
                // r:id; the relationship namespace prefix varies
                if let (Some(name), Some(id)) = (attr(&e, b"name", decoder), attr(&e, b"id", decoder)) {
                    sheets.push((name, id));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(sheets)
}

fn parse_relationship_targets(xml: &str) -> FillResult<HashMap<String, String>> {
    let mut reader = XmlReader::from_str(xml);
    reader.config_mut().trim_text(true);
    let decoder = reader.decoder();
    let mut targets = HashMap::new();

    loop {
        match reader
            .read_event()
            .map_err(|e| xml_error("xl/_rels/workbook.xml.rels", e))?
        {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                if let (Some(id), Some(target)) =
                    (attr(&e, b"Id", decoder), attr(&e, b"Target", decoder))
                {
                    targets.insert(id, target);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(targets)
}

/// Relationship targets are relative to `xl/` unless absolute
fn part_path(target: &str) -> String {
    match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => format!("xl/{}", target),
    }
}

//==============================================================================
// Helpers
//==============================================================================

fn attr(e: &BytesStart<'_>, key: &[u8], decoder: Decoder) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.local_name().as_ref() == key)
        .and_then(|a| a.decode_and_unescape_value(decoder).ok())
        .map(|v| v.into_owned())
}

fn num<T: FromStr>(value: Option<String>) -> Option<T> {
    value?.parse().ok()
}

fn is_true(value: Option<String>) -> bool {
    matches!(value.as_deref(), Some("1" | "true"))
}

/// Font flags such as `<b/>` are on unless `val` says otherwise
fn toggled(e: &BytesStart<'_>, decoder: Decoder) -> bool {
    attr(e, b"val", decoder).map_or(true, |v| v != "0" && v != "false")
}

/// `FFRRGGBB` or `RRGGBB` → `0xRRGGBB`
fn parse_rgb(value: &str) -> Option<u32> {
    let hex = value.get(value.len().saturating_sub(6)..)?;
    u32::from_str_radix(hex, 16).ok()
}

fn strip_width_padding(raw: f64) -> f64 {
    let frac = raw % 1.0;
    for padding in [CALIBRI_WIDTH_PADDING, ALT_WIDTH_PADDING] {
        if (frac - padding).abs() < WIDTH_TOLERANCE && raw >= padding {
            return ((raw - padding) * 10000.0).round() / 10000.0;
        }
    }
    raw
}

/// `B3` → `(3, 2)`, 1-indexed; `$` markers are ignored
pub(crate) fn parse_cell_ref(reference: &str) -> Option<(u32, u32)> {
    let reference = reference.replace('$', "");
    let split = reference.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = reference.split_at(split);
    if letters.is_empty() {
        return None;
    }

    let mut col: u32 = 0;
    for ch in letters.chars() {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let digit = ch.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
        col = col.saturating_mul(26).saturating_add(digit);
    }
    let row: u32 = digits.parse().ok()?;

    (row >= 1 && col <= MAX_COLUMN).then_some((row, col))
}

fn parse_range(reference: &str) -> Option<CellRange> {
    let (first, last) = reference.split_once(':').unwrap_or((reference, reference));
    let (first_row, first_col) = parse_cell_ref(first)?;
    let (last_row, last_col) = parse_cell_ref(last)?;
    Some(CellRange {
        first_row,
        first_col,
        last_row,
        last_col,
    })
}

fn xml_error(part: &str, e: quick_xml::Error) -> FillError {
    FillError::Excel(format!("Failed to parse {}: {}", part, e))
}

fn zip_error(e: ZipError) -> FillError {
    FillError::Excel(format!("Failed to read workbook package: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <numFmts count="1"><numFmt numFmtId="164" formatCode="yyyy-mm-dd"/></numFmts>
  <fonts count="2">
    <font><sz val="11"/><color theme="1"/><name val="Calibri"/></font>
    <font><b/><i val="0"/><u/><sz val="14"/><color rgb="FF1F4E79"/><name val="Arial"/></font>
  </fonts>
  <fills count="3">
    <fill><patternFill patternType="none"/></fill>
    <fill><patternFill patternType="gray125"/></fill>
    <fill><patternFill patternType="solid"><fgColor rgb="FFFFFF00"/><bgColor indexed="64"/></patternFill></fill>
  </fills>
  <borders count="2">
    <border><left/><right/><top/><bottom/><diagonal/></border>
    <border><left style="thin"><color auto="1"/></left><right style="none"/><top/><bottom style="double"/></border>
  </borders>
  <cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>
  <cellXfs count="4">
    <xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/>
    <xf numFmtId="164" fontId="0" fillId="0" borderId="0" xfId="0" applyNumberFormat="1"/>
    <xf numFmtId="0" fontId="1" fillId="2" borderId="1" xfId="0"><alignment horizontal="center" vertical="top" wrapText="1"/></xf>
    <xf numFmtId="14" fontId="0" fillId="0" borderId="0" xfId="0"/>
  </cellXfs>
  <dxfs count="1"><dxf><font><b/></font></dxf></dxfs>
</styleSheet>"#;

    #[test]
    fn test_parse_cell_formats() {
        let styles = StyleSheet::parse(STYLES_XML).unwrap();
        assert_eq!(styles.len(), 4);

        assert_eq!(styles.get(0).unwrap().num_format, NumFormat::General);
        assert_eq!(
            styles.get(1).unwrap().num_format,
            NumFormat::Custom("yyyy-mm-dd".to_string())
        );
        assert_eq!(styles.get(3).unwrap().num_format, NumFormat::Builtin(14));

        let header = styles.get(2).unwrap();
        assert_eq!(
            header.font,
            FontStyle {
                name: Some("Arial".to_string()),
                size: Some(14.0),
                color: Some(0x1F4E79),
                bold: true,
                italic: false,
                strike: false,
                underline: Some("single".to_string()),
            }
        );
        assert_eq!(header.fill, Some(0xFFFF00));
        assert_eq!(header.border.left.as_deref(), Some("thin"));
        assert_eq!(header.border.right, None);
        assert_eq!(header.border.bottom.as_deref(), Some("double"));
        assert_eq!(header.horizontal.as_deref(), Some("center"));
        assert_eq!(header.vertical.as_deref(), Some("top"));
        assert!(header.wrap);
    }

    #[test]
    fn test_theme_colors_and_patterns_skipped() {
        let styles = StyleSheet::parse(STYLES_XML).unwrap();
        let plain = styles.get(0).unwrap();
        assert_eq!(plain.font.color, None);
        assert_eq!(plain.fill, None);
        assert_eq!(plain.font.name.as_deref(), Some("Calibri"));
    }

    #[test]
    fn test_parse_sheet_layout() {
        let xml = r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <cols>
    <col min="1" max="1" width="40.7109375" customWidth="1"/>
    <col min="3" max="5" width="12.83203125" customWidth="1" hidden="1"/>
  </cols>
  <sheetData>
    <row r="1" spans="1:3" ht="24" customHeight="1"><c r="A1" s="2" t="s"><v>0</v></c><c r="B1" s="2"/><c r="C1" s="2"/></row>
    <row r="2" ht="15"><c r="A2" t="s"><v>1</v></c><c r="B2" s="0"/></row>
    <row r="3" hidden="1"><c r="B3" s="1"><v>45672</v></c></row>
  </sheetData>
  <mergeCells count="1"><mergeCell ref="A1:C1"/></mergeCells>
</worksheet>"#;
        let layout = parse_sheet_layout(xml).unwrap();

        assert_eq!(
            layout.columns,
            vec![
                ColumnSpan { first: 1, last: 1, width: Some(40.0), hidden: false },
                ColumnSpan { first: 3, last: 5, width: Some(12.0), hidden: true },
            ]
        );
        assert_eq!(layout.rows.len(), 2);
        assert_eq!(layout.rows[&1], RowFormat { height: Some(24.0), hidden: false });
        assert_eq!(layout.rows[&3], RowFormat { height: None, hidden: true });
        assert_eq!(layout.style_of(1, 3), Some(2));
        assert_eq!(layout.style_of(2, 2), None);
        assert_eq!(layout.style_of(3, 2), Some(1));
        assert_eq!(
            layout.merged,
            vec![CellRange { first_row: 1, first_col: 1, last_row: 1, last_col: 3 }]
        );
    }

    #[test]
    fn test_parse_cell_ref() {
        assert_eq!(parse_cell_ref("A1"), Some((1, 1)));
        assert_eq!(parse_cell_ref("B3"), Some((3, 2)));
        assert_eq!(parse_cell_ref("$AA$10"), Some((10, 27)));
        assert_eq!(parse_cell_ref("XFD1"), Some((1, 16_384)));
        assert_eq!(parse_cell_ref("A0"), None);
        assert_eq!(parse_cell_ref("12"), None);
        assert_eq!(parse_cell_ref("B"), None);
    }

    #[test]
    fn test_single_cell_merge_ref() {
        let range = parse_range("D4").unwrap();
        assert!(range.is_single_cell());
    }

    #[test]
    fn test_relationship_paths() {
        let rels = r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="/xl/worksheets/sheet2.xml"/>
</Relationships>"#;
        let workbook = r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <sheets><sheet name="BOQ &amp; Notes" sheetId="1" r:id="rId1"/><sheet name="Data" sheetId="2" r:id="rId2"/></sheets>
</workbook>"#;

        let targets = parse_relationship_targets(rels).unwrap();
        let sheets = parse_sheet_rel_ids(workbook).unwrap();

        assert_eq!(
            sheets,
            vec![
                ("BOQ & Notes".to_string(), "rId1".to_string()),
                ("Data".to_string(), "rId2".to_string())
            ]
        );
        assert_eq!(part_path(&targets["rId1"]), "xl/worksheets/sheet1.xml");
        assert_eq!(part_path(&targets["rId2"]), "xl/worksheets/sheet2.xml");
    }

    #[test]
    fn test_malformed_styles_rejected() {
        let err = StyleSheet::parse("<styleSheet><fonts></numFmts></styleSheet>").unwrap_err();
        assert!(matches!(err, FillError::Excel(_)));
    }
}
