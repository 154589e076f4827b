//! Write `swatches.html`: the built-in beer color standards with their
//! captions, grouped by SRM range.

use std::{io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use beer_color_meter::{BeerColorClassifier, Classification};

type Err = Box<dyn Error>;

fn css_string(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn swatch(fh: &mut impl Write, beer: &Classification,
          width: u32) -> Result<(), Err> {
    let caption = beer.to_string().replace('\n', "<br/>");
    writeln!(fh, "  <td style=\"width: {width}px; height: 90px; \
                  font-size: 10px; text-align: center; \
                  background-color: {}; color: {}\">{caption}</td>",
             css_string(beer.entry.color), css_string(beer.text_color()))?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let classifier = BeerColorClassifier::default();
    let mut fh = BufWriter::new(File::create("swatches.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Beer color standards</title>\n\
                  </head>\n\
                  <body>")?;

    let (lo, hi) = classifier.srm_range();
    writeln!(fh, "<h3>SRM {lo} to {hi}</h3>")?;
    let mut name = None;
    for entry in classifier.tables().entries() {
        let Some(beer) = classifier.select(entry.srm) else { continue };
        if beer.color_name != name {
            if name.is_some() {
                writeln!(fh, "</tr></table>")?;
            }
            writeln!(fh, "<h4>{}</h4>\n\
                          <table style=\"border: 0px; border-spacing: 0px\">\
                          <tr>",
                     beer.color_name.unwrap_or("Unclassified"))?;
            name = beer.color_name;
        }
        swatch(&mut fh, &beer, 70)?;
    }
    writeln!(fh, "</tr></table>")?;

    writeln!(fh, "<h3>Measured</h3>\n\
                  <table style=\"border: 0px; border-spacing: 0px\"><tr>")?;
    // Mixes of neighbouring swatches, as a photo of a glass would give.
    for pair in classifier.tables().entries().windows(2).step_by(6) {
        let mut pixels = Vec::new();
        for e in pair {
            let RGB8 { r, g, b } = e.color;
            pixels.extend([r, g, b, 255].repeat(8));
        }
        let beer = classifier.measure(&pixels)?;
        swatch(&mut fh, &beer, 70)?;
    }
    writeln!(fh, "</tr></table>")?;

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
