// core/src/parser.rs
use std::io::BufRead;

use log::{debug, warn};

use crate::error::RecordError;
use crate::models::{Sample, MAX_HEIGHT};

/// Tolker én logglinje:
/// `<dato> <tid> <type> <unix>.<brøk> <høyde|None>`
///
/// Felter etter det femte ignoreres. Ellers valideres ingenting utover formen;
/// søppel i høydefeltet blir bare et rart tall.
pub fn parse_line(line: &str) -> Result<Sample, RecordError> {
    let v: Vec<&str> = line.split_whitespace().collect();
    if v.len() < 5 {
        return Err(RecordError::TooFewFields(v.len()));
    }

    Ok(Sample {
        date: v[0].to_string(),
        time: v[1].to_string(),
        kind: v[2].to_string(),
        timestamp: parse_timestamp(v[3])?,
        height_m: parse_height(v[4]),
    })
}

/// Heltallsdelen av `<sekunder>.<brøk>`. Begge deler må være sifre.
fn parse_timestamp(tok: &str) -> Result<u64, RecordError> {
    let bad = || RecordError::BadTimestamp(tok.to_string());

    let (secs, frac) = tok.split_once('.').ok_or_else(bad)?;
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(secs) || !all_digits(frac) {
        return Err(bad());
    }
    secs.parse::<u64>().map_err(|_| bad())
}

/// Høyde i meter. `None` => MAX_HEIGHT.
///
/// Ellers samme regler som C `strtol(s, NULL, 0)`: valgfritt fortegn,
/// `0x` = hex, ledende `0` = oktal, lengste gyldige prefiks teller og
/// ingen sifre gir 0. Resultatet kuttes til 32 bit (negative tall wrapper).
pub fn parse_height(tok: &str) -> u32 {
    if tok == "None" {
        return MAX_HEIGHT;
    }

    let mut s = tok.trim_start();
    let mut neg = false;
    if let Some(rest) = s.strip_prefix('-') {
        neg = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    }

    let hex_body = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .filter(|rest| rest.chars().next().is_some_and(|c| c.is_ascii_hexdigit()));

    let (radix, digits) = match hex_body {
        Some(rest) => (16, rest),
        None if s.starts_with('0') => (8, s),
        None => (10, s),
    };

    let mut acc: i64 = 0;
    let mut overflow = false;
    for d in digits.chars().map_while(|c| c.to_digit(radix)) {
        match acc.checked_mul(radix as i64).and_then(|x| x.checked_add(d as i64)) {
            Some(x) => acc = x,
            None => {
                overflow = true;
                break;
            }
        }
    }

    let value = match (overflow, neg) {
        (true, false) => i64::MAX,
        (true, true) => i64::MIN,
        (false, false) => acc,
        (false, true) => -acc,
    };
    value as u32
}

/// Itererer samples fra en `BufRead` til første linje med feil form.
///
/// Tomme linjer hoppes over. Bytes som ikke er UTF-8 erstattes (U+FFFD) og
/// linjen tolkes som vanlig. I/O-feil avslutter strømmen som EOF.
pub struct SampleSource<R> {
    reader: R,
    line: Vec<u8>,
    line_no: usize,
    done: bool,
}

impl<R: BufRead> SampleSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::with_capacity(64),
            line_no: 0,
            done: false,
        }
    }

    pub fn lines_read(&self) -> usize {
        self.line_no
    }
}

impl<R: BufRead> Iterator for SampleSource<R> {
    type Item = Sample;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.line.clear();
            match self.reader.read_until(b'\n', &mut self.line) {
                Ok(0) => self.done = true,
                Ok(_) => {
                    self.line_no += 1;
                    let text = String::from_utf8_lossy(&self.line);
                    if text.trim().is_empty() {
                        continue;
                    }
                    match parse_line(&text) {
                        Ok(sample) => return Some(sample),
                        Err(e) => {
                            debug!("line {}: {} => end of input", self.line_no, e);
                            self.done = true;
                        }
                    }
                }
                Err(e) => {
                    warn!("read error after line {}: {} => end of input", self.line_no, e);
                    self.done = true;
                }
            }
        }
        None
    }
}
