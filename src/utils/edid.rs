//! Minimal EDID 1.x decoding: vendor, monitor name and physical size

use crate::error::{DisplayfetchError, Result};

const HEADER: [u8; 8] = [0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00];
const BLOCK_LEN: usize = 128;
const DESCRIPTOR_OFFSETS: [usize; 4] = [54, 72, 90, 108];
const DESCRIPTOR_LEN: usize = 18;
const TAG_MONITOR_NAME: u8 = 0xFC;

/// Fields displayfetch cares about from the base EDID block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Edid {
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub width_mm: Option<u32>,
    pub height_mm: Option<u32>,
}

pub fn parse(bytes: &[u8]) -> Result<Edid> {
    if bytes.len() < BLOCK_LEN {
        return Err(DisplayfetchError::parse(format!(
            "EDID too short: {} bytes",
            bytes.len()
        )));
    }
    if bytes[..8] != HEADER {
        return Err(DisplayfetchError::parse("EDID header mismatch"));
    }

    let (width_mm, height_mm) = physical_size_mm(bytes);
    let id = pnp_id(bytes[8], bytes[9]);
    let manufacturer = id.as_deref().map(vendor_name);
    let labels: Vec<&str> = id.iter().chain(manufacturer.iter()).map(String::as_str).collect();
    let model = monitor_name(bytes).map(|name| strip_vendor_prefix(name, &labels));

    Ok(Edid {
        manufacturer,
        model,
        width_mm,
        height_mm,
    })
}

/// Panels often repeat the vendor in their name ("DELL U2415"); drop that leading word
fn strip_vendor_prefix(model: String, labels: &[&str]) -> String {
    if let Some((first, rest)) = model.split_once(char::is_whitespace) {
        let rest = rest.trim_start();
        let is_vendor = labels.iter().any(|label| {
            label.eq_ignore_ascii_case(first)
                || label
                    .split_whitespace()
                    .next()
                    .map_or(false, |word| word.eq_ignore_ascii_case(first))
        });
        if is_vendor && !rest.is_empty() {
            return rest.to_string();
        }
    }
    model
}

/// Three-letter PNP vendor ID packed into two big-endian bytes
fn pnp_id(hi: u8, lo: u8) -> Option<String> {
    let packed = u16::from_be_bytes([hi, lo]);
    [(packed >> 10) & 0x1F, (packed >> 5) & 0x1F, packed & 0x1F]
        .iter()
        .map(|&code| match code {
            1..=26 => Some(char::from(b'A' + code as u8 - 1)),
            _ => None,
        })
        .collect()
}

/// Known vendor names; anything else keeps the bare PNP ID
fn vendor_name(id: &str) -> String {
    let name = match id {
        "ACR" => "Acer",
        "AOC" => "AOC",
        "APP" => "Apple",
        "AUO" => "AU Optronics",
        "AUS" => "ASUS",
        "BNQ" => "BenQ",
        "BOE" => "BOE",
        "CMN" => "Chimei Innolux",
        "DEL" => "Dell",
        "ENC" => "EIZO",
        "GBT" => "Gigabyte",
        "GSM" => "LG Electronics",
        "HPN" | "HWP" => "HP",
        "IVM" => "Iiyama",
        "LEN" => "Lenovo",
        "LGD" => "LG Display",
        "MSI" => "MSI",
        "NEC" => "NEC",
        "PHL" => "Philips",
        "SAM" => "Samsung",
        "SDC" => "Samsung Display",
        "SHP" => "Sharp",
        "SNY" => "Sony",
        "VSC" => "ViewSonic",
        other => other,
    };
    name.to_string()
}

fn monitor_name(bytes: &[u8]) -> Option<String> {
    DESCRIPTOR_OFFSETS
        .iter()
        .map(|&offset| &bytes[offset..offset + DESCRIPTOR_LEN])
        .find(|d| d[0] == 0 && d[1] == 0 && d[3] == TAG_MONITOR_NAME)
        .map(|d| {
            let text = &d[5..];
            let end = text.iter().position(|&b| b == 0x0A).unwrap_or(text.len());
            String::from_utf8_lossy(&text[..end]).trim().to_string()
        })
        .filter(|name| !name.is_empty())
}

/// Size from the first detailed timing descriptor, else the coarse cm fields
fn physical_size_mm(bytes: &[u8]) -> (Option<u32>, Option<u32>) {
    let dtd = &bytes[54..54 + DESCRIPTOR_LEN];
    let is_timing = dtd[0] != 0 || dtd[1] != 0;
    if is_timing {
        let width = u32::from(dtd[12]) | (u32::from(dtd[14] & 0xF0) << 4);
        let height = u32::from(dtd[13]) | (u32::from(dtd[14] & 0x0F) << 8);
        if width > 0 && height > 0 {
            return (Some(width), Some(height));
        }
    }

    let nonzero = |cm: u8| (cm > 0).then(|| u32::from(cm) * 10);
    (nonzero(bytes[21]), nonzero(bytes[22]))
}
