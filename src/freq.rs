//! Frequency text forms.
//!
//! QSO lines carry whole kilohertz (`14325`). The dotted form
//! `MHz[.KHz[.Hz]]` is also accepted, each sub-unit group right-padded with
//! zeros to three digits, so `14.2` is 14 200 000 Hz.

/// Frequency in Hertz.
pub type Hertz = u64;

/// Parses a QSO frequency token into Hertz.
pub fn parse_frequency(token: &str) -> Option<Hertz> {
    if token.contains('.') {
        parse_dotted_mhz(token)
    } else {
        digits(token)?.checked_mul(1_000)
    }
}

/// Parses `MHz[.KHz[.Hz]]` into Hertz.
pub fn parse_dotted_mhz(token: &str) -> Option<Hertz> {
    let mut groups = token.split('.');
    let mhz = digits(groups.next()?)?;
    let khz = match groups.next() {
        Some(group) => sub_unit(group)?,
        None => 0,
    };
    let hz = match groups.next() {
        Some(group) => sub_unit(group)?,
        None => 0,
    };
    if groups.next().is_some() {
        return None;
    }
    mhz.checked_mul(1_000_000)?
        .checked_add(khz * 1_000)?
        .checked_add(hz)
}

/// Renders Hertz as dot-separated digit triples counted from the right.
pub fn hz_to_dotted_mhz(hz: Hertz) -> String {
    let digits = hz.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Renders the frequency column of a QSO line.
///
/// Whole kilohertz are written as an integer; anything finer falls back to
/// the full `MHz.KHz.Hz` form so the value reads back unchanged.
pub fn format_qso_frequency(hz: Hertz) -> String {
    if hz % 1_000 == 0 {
        (hz / 1_000).to_string()
    } else {
        format!("{}.{:03}.{:03}", hz / 1_000_000, (hz / 1_000) % 1_000, hz % 1_000)
    }
}

fn digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn sub_unit(group: &str) -> Option<u64> {
    if group.len() > 3 {
        return None;
    }
    let value = digits(group)?;
    Some(value * 10u64.pow(3 - group.len() as u32))
}
