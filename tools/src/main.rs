// Regenerate the built-in reference tables of beer-color-meter:
//
//     cargo run --bin beer-color-tools [beer_colors.hjson [../src/reference/data.rs]]
//
// The dataset lists `colors` (SRM value and "rgb(r,g,b)" swatch) and
// `groups` (maximum SRM and name), see beer_colors.hjson.  The tables
// are checked with `ReferenceTables::new` before anything is written.

use std::{env,
          fs::File,
          io::{BufWriter, prelude::*},
          error::Error};
use serde_hjson::Value;
use rgb::RGB8;
use beer_color_meter::{BeerColorEntry, BeerColorGroup, ReferenceTables};
use beer_color_tools::logger;
use tracing::info;

type Err = Box<dyn Error>;

fn fail(msg: String) -> Err {
    format!("beer-color-tools: {msg}").into()
}

fn number(v: &Value) -> Option<f64> {
    match *v {
        Value::I64(i) => Some(i as f64),
        Value::U64(u) => Some(u as f64),
        Value::F64(x) => Some(x),
        _ => None,
    }
}

/// Convert colors such as "rgb(67,147,195)" to `RGB8 { r: 67, g: 147, b: 195 }`.
fn parse_color(s: &str) -> Result<RGB8, Err> {
    let inner = s.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| fail(format!("not a color “{s}”")))?;
    let mut c = [0u8; 3];
    let mut n = 0;
    for (i, x) in inner.split(',').enumerate() {
        if i >= 3 { return Err(fail(format!("not a color “{s}”"))) }
        c[i] = x.trim().parse()
            .map_err(|_| fail(format!("not a color “{s}”")))?;
        n += 1;
    }
    if n != 3 { return Err(fail(format!("not a color “{s}”"))) }
    Ok(RGB8 { r: c[0], g: c[1], b: c[2] })
}

fn field<'a>(v: &'a Value, name: &str) -> Result<&'a Value, Err> {
    match v {
        Value::Object(m) => m.get(name)
            .ok_or_else(|| fail(format!("missing field “{name}” in {v:?}"))),
        _ => Err(fail(format!("{v:?} is not an object"))),
    }
}

fn array<'a>(v: &'a Value, name: &str) -> Result<&'a Vec<Value>, Err> {
    match field(v, name)? {
        Value::Array(a) => Ok(a),
        x => Err(fail(format!("“{name}” is not an array: {x:?}"))),
    }
}

fn entries_from_json(json: &Value) -> Result<Vec<BeerColorEntry>, Err> {
    array(json, "colors")?.iter().map(|c| {
        let srm = number(field(c, "srm")?)
            .ok_or_else(|| fail(format!("SRM of {c:?} is not a number")))?;
        let color = match field(c, "rgb")? {
            Value::String(s) => parse_color(s)?,
            x => return Err(fail(format!("{x:?} is not a color"))),
        };
        Ok(BeerColorEntry::new(srm, color))
    }).collect()
}

fn groups_from_json(json: &Value) -> Result<Vec<BeerColorGroup>, Err> {
    array(json, "groups")?.iter().map(|g| {
        let max = number(field(g, "maximum_srm")?)
            .ok_or_else(|| fail(format!("maximum SRM of {g:?} is not a number")))?;
        match field(g, "name")? {
            Value::String(name) => Ok(BeerColorGroup::new(max, name.as_str())),
            x => Err(fail(format!("{x:?} is not a name"))),
        }
    }).collect()
}

fn write_tables(fh: &mut impl Write, source: &str,
                tables: &ReferenceTables) -> std::io::Result<()> {
    writeln!(fh, "// Written by beer-color-tools from {source}\n\n\
                  use lazy_static::lazy_static;\n\
                  use rgb::RGB8;\n\
                  use super::ty::*;\n")?;
    writeln!(fh, "lazy_static! {{\n  \
                  pub(crate) static ref BEER_COLORS: Vec<BeerColorEntry> \
                  = vec![")?;
    for e in tables.entries() {
        let RGB8 { r, g, b } = e.color;
        writeln!(fh, "    BeerColorEntry::new({:?}, RGB8 {{ r: {r}, g: {g}, \
                      b: {b} }}),", e.srm)?;
    }
    writeln!(fh, "  ];\n}}\n")?;
    writeln!(fh, "lazy_static! {{\n  \
                  pub(crate) static ref BEER_COLOR_GROUPS: Vec<BeerColorGroup> \
                  = vec![")?;
    for g in tables.groups() {
        writeln!(fh, "    BeerColorGroup::new({:?}, {:?}),",
                 g.maximum_srm, g.color_name)?;
    }
    writeln!(fh, "  ];\n}}")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    logger::init();
    let mut args = env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "beer_colors.hjson".into());
    let output = args.next()
        .unwrap_or_else(|| "../src/reference/data.rs".into());

    let json: Value = serde_hjson::from_reader(File::open(&input)?)?;
    let tables = ReferenceTables::new(entries_from_json(&json)?,
                                      groups_from_json(&json)?)?;
    info!("{} beer colors, {} color groups read from {input}",
          tables.entries().len(), tables.groups().len());

    let source = input.rsplit('/').next().unwrap_or(&input);
    let mut fh = BufWriter::new(File::create(&output)?);
    write_tables(&mut fh, source, &tables)?;
    fh.flush()?;
    info!("Wrote {output}");
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors() {
        assert_eq!(parse_color("rgb(255,230,153)").unwrap(),
                   RGB8::new(255, 230, 153));
        assert_eq!(parse_color("rgb(1, 2, 3)").unwrap(), RGB8::new(1, 2, 3));
        assert!(parse_color("rgb(1,2)").is_err());
        assert!(parse_color("rgb(1,2,3,4)").is_err());
        assert!(parse_color("rgb(256,0,0)").is_err());
        assert!(parse_color("#ffffff").is_err());
    }

    #[test]
    fn generated_source() {
        let json: Value = serde_hjson::from_str(
            "{ colors: [ { srm: 1, rgb: \"rgb(255,230,153)\" } ]\n  \
               groups: [ { maximum_srm: 2, name: \"Pale Straw\" } ] }")
            .unwrap();
        let tables = ReferenceTables::new(entries_from_json(&json).unwrap(),
                                          groups_from_json(&json).unwrap())
            .unwrap();
        let mut out = Vec::new();
        write_tables(&mut out, "test.hjson", &tables).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("// Written by beer-color-tools from test.hjson"));
        assert!(out.contains(
            "    BeerColorEntry::new(1.0, RGB8 { r: 255, g: 230, b: 153 }),\n"));
        assert!(out.contains("    BeerColorGroup::new(2.0, \"Pale Straw\"),\n"));
    }

    #[test]
    fn bundled_dataset_matches_builtin_tables() {
        let json: Value = serde_hjson::from_reader(
            File::open(concat!(env!("CARGO_MANIFEST_DIR"),
                               "/beer_colors.hjson")).unwrap()).unwrap();
        let tables = ReferenceTables::new(entries_from_json(&json).unwrap(),
                                          groups_from_json(&json).unwrap())
            .unwrap();
        assert_eq!(&tables, ReferenceTables::standard());
    }
}
