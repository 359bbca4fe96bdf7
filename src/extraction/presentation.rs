use std::io::{Cursor, Read};

use once_cell::sync::Lazy;
use quick_xml::{events::Event, Reader};
use regex::Regex;
use zip::ZipArchive;

use crate::errors::{AppError, AppResult};

static SLIDE_PART: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ppt/slides/slide(\d+)\.xml$").expect("SLIDE_PART is a valid regex pattern")
});

/// Slide text in slide order, one text run per line.
pub fn extract(data: &[u8]) -> AppResult<String> {
    let mut archive = ZipArchive::new(Cursor::new(data)).map_err(|e| {
        AppError::ExtractionFailed(format!("Could not read PowerPoint document: {}", e))
    })?;

    let mut slides: Vec<(u32, String)> = archive
        .file_names()
        .filter_map(|name| {
            let number = SLIDE_PART.captures(name)?.get(1)?.as_str().parse().ok()?;
            Some((number, name.to_string()))
        })
        .collect();
    slides.sort_by_key(|(number, _)| *number);

    let mut text = String::new();
    for (_, name) in slides {
        let mut xml = String::new();
        archive
            .by_name(&name)
            .map_err(|e| AppError::ExtractionFailed(format!("Missing slide {}: {}", name, e)))?
            .read_to_string(&mut xml)
            .map_err(|e| AppError::ExtractionFailed(format!("Unreadable slide {}: {}", name, e)))?;

        for run in slide_text_runs(&xml)? {
            text.push_str(&run);
            text.push('\n');
        }
    }

    Ok(text)
}

/// Contents of every `<a:t>` element of one slide.
fn slide_text_runs(xml: &str) -> AppResult<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut runs = Vec::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"a:t" => in_text = true,
            Ok(Event::End(e)) if e.name().as_ref() == b"a:t" => in_text = false,
            Ok(Event::Text(t)) if in_text => {
                let value = t
                    .unescape()
                    .map_err(|e| AppError::ExtractionFailed(format!("Bad slide text: {}", e)))?;
                runs.push(value.into_owned());
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(AppError::ExtractionFailed(format!(
                    "Malformed slide XML at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
        }
    }

    Ok(runs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::{write::SimpleFileOptions, ZipWriter};

    fn slide(texts: &[&str]) -> String {
        let runs: String = texts
            .iter()
            .map(|t| format!("<a:p><a:r><a:t>{}</a:t></a:r></a:p>", t))
            .collect();
        format!(
            "<?xml version=\"1.0\"?><p:sld xmlns:a=\"a\" xmlns:p=\"p\"><p:cSld><p:spTree>{}</p:spTree></p:cSld></p:sld>",
            runs
        )
    }

    fn presentation(parts: &[(&str, String)]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, body) in parts {
            writer.start_file(*name, SimpleFileOptions::default()).unwrap();
            writer.write_all(body.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn reads_slides_in_numeric_order() {
        let data = presentation(&[
            ("ppt/slides/slide10.xml", slide(&["tenth"])),
            ("ppt/slides/slide2.xml", slide(&["second", "still second"])),
            ("ppt/slides/slide1.xml", slide(&["first &amp; foremost"])),
            ("ppt/slideLayouts/slideLayout1.xml", slide(&["layout text"])),
        ]);

        let text = extract(&data).unwrap();
        assert_eq!(text, "first & foremost\nsecond\nstill second\ntenth\n");
    }

    #[test]
    fn rejects_bytes_that_are_not_a_zip() {
        let err = extract(b"definitely not a presentation").unwrap_err();
        assert!(matches!(err, AppError::ExtractionFailed(_)));
    }
}
