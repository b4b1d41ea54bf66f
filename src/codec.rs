//! Log parse/write orchestration.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use crate::{
    document::{ExtensionLine, FieldMut, LogDocument},
    error::{CabrilloError, CabrilloResult},
    qso::{QSO_MARKER, decode_qso, encode_qso},
    registry::{CABRILLO_VERSION, HeaderField, HeaderFieldSpec, field_for, header_fields},
    schema::{SchemaKind, schema_for},
    validate::validate,
};

/// Final line of every written log.
pub const END_OF_LOG: &str = "END-OF-LOG:";

/// Prefixes of lines skipped as comments.
pub const COMMENT_MARKERS: &[&str] = &["#", "//"];

/// Prefix of private header lines kept as [`ExtensionLine`]s.
pub const EXTENSION_PREFIX: &str = "X-";

/// Codec behaviour settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Fail on invalid values instead of dropping them.
    pub strict: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self { strict: true }
    }
}

/// Cabrillo parser and writer bound to one [`CodecConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CabrilloCodec {
    config: CodecConfig,
}

impl CabrilloCodec {
    /// Creates a codec with `config`.
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Codec that fails on invalid values.
    pub fn strict() -> Self {
        Self::new(CodecConfig { strict: true })
    }

    /// Codec that drops invalid values with a warning.
    pub fn lenient() -> Self {
        Self::new(CodecConfig { strict: false })
    }

    /// Active configuration.
    pub fn config(&self) -> CodecConfig {
        self.config
    }

    /// True when invalid values fail the operation.
    pub fn is_strict(&self) -> bool {
        self.config.strict
    }

    /// Parses a whole log.
    ///
    /// QSO lines seen before a `CONTEST` header are dropped. Errors carry the
    /// 1-based line number of the offending line.
    pub fn parse(&self, text: &str) -> CabrilloResult<LogDocument> {
        let mut doc = LogDocument::default();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || COMMENT_MARKERS.iter().any(|m| line.starts_with(m)) {
                continue;
            }
            let outcome = match line.strip_prefix(QSO_MARKER) {
                Some(body) => self.parse_qso_line(&mut doc, body),
                None => self.parse_header_line(&mut doc, line),
            };
            outcome.map_err(|err| err.at_line(idx + 1))?;
        }
        Ok(doc)
    }

    /// Reads and parses the log at `path`.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> CabrilloResult<LogDocument> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let doc = self.parse(&text)?;
        info!(path = %path.display(), qsos = doc.qsos.len(), "parsed cabrillo log");
        Ok(doc)
    }

    /// Renders `doc` as log text ending in [`END_OF_LOG`].
    ///
    /// An unset `version` is written as [`CABRILLO_VERSION`]. Values spanning
    /// more than one line and extension keys outside the `X-` namespace are
    /// invalid.
    pub fn to_text(&self, doc: &LogDocument) -> CabrilloResult<String> {
        let mut out = String::new();

        for spec in header_fields() {
            let mut values = doc.values(spec.field);
            if spec.field == HeaderField::Version && values.is_empty() {
                values.push(CABRILLO_VERSION);
            }
            for value in values {
                self.write_header_line(&mut out, spec, value)?;
            }
        }

        for ext in &doc.extensions {
            self.write_extension_line(&mut out, ext)?;
        }

        for qso in &doc.qsos {
            let encoded = qso_schema(doc).and_then(|kind| encode_qso(qso, kind));
            match encoded {
                Ok(line) => push_line(&mut out, &line),
                Err(err) if !self.is_strict() => warn!(%err, "omitting QSO"),
                Err(err) => return Err(err),
            }
        }

        push_line(&mut out, END_OF_LOG);
        Ok(out)
    }

    /// Writes `doc` to `sink`.
    ///
    /// The text is rendered completely before the first byte reaches `sink`,
    /// so a failed write leaves `sink` untouched.
    pub fn write<W: Write>(&self, doc: &LogDocument, sink: &mut W) -> CabrilloResult<()> {
        let text = self.to_text(doc)?;
        sink.write_all(text.as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    /// Writes `doc` to `<CALLSIGN>.log` inside `dir` (or the working directory).
    ///
    /// A `/` in the callsign becomes `_` in the filename.
    pub fn write_file(&self, doc: &LogDocument, dir: Option<&Path>) -> CabrilloResult<PathBuf> {
        let callsign = doc
            .callsign
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or(CabrilloError::Missing("callsign (required for filename)"))?;

        let text = self.to_text(doc)?;
        let filename = format!("{}.log", callsign.replace('/', "_"));
        let path = match dir {
            Some(dir) => dir.join(filename),
            None => PathBuf::from(filename),
        };
        fs::write(&path, text)?;
        info!(path = %path.display(), qsos = doc.qsos.len(), "wrote cabrillo log");
        Ok(path)
    }

    fn parse_header_line(&self, doc: &mut LogDocument, line: &str) -> CabrilloResult<()> {
        let Some((key, value)) = split_header(line) else {
            trace!(line, "no header separator, skipping");
            return Ok(());
        };

        let Some(spec) = field_for(key) else {
            if is_extension_key(key) {
                doc.extensions.push(ExtensionLine {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            } else {
                debug!(key, "unknown header key, skipping");
            }
            return Ok(());
        };

        if !self.accept(spec, value)? {
            return Ok(());
        }

        match doc.field_mut(spec.field) {
            FieldMut::Scalar(slot) => *slot = Some(value.to_string()),
            FieldMut::Multi(values) => {
                if !value.is_empty() {
                    values.push(value.to_string());
                }
            }
        }
        Ok(())
    }

    fn parse_qso_line(&self, doc: &mut LogDocument, body: &str) -> CabrilloResult<()> {
        let Some(contest) = doc.contest.as_deref() else {
            debug!("QSO line before CONTEST header, skipping");
            return Ok(());
        };
        let Some(kind) = schema_for(contest) else {
            debug!(contest, "no QSO layout for contest, skipping");
            return Ok(());
        };

        match decode_qso(body, kind) {
            Ok(qso) => doc.qsos.push(qso),
            Err(err) if !self.is_strict() => warn!(%err, "dropping unreadable QSO line"),
            Err(err) => return Err(err),
        }
        Ok(())
    }

    fn write_header_line(
        &self,
        out: &mut String,
        spec: &HeaderFieldSpec,
        value: &str,
    ) -> CabrilloResult<()> {
        let value = value.trim();
        if value.is_empty() || !self.accept(spec, value)? {
            return Ok(());
        }
        push_line(out, &format!("{}: {value}", spec.line_key));
        Ok(())
    }

    fn write_extension_line(&self, out: &mut String, ext: &ExtensionLine) -> CabrilloResult<()> {
        let value = ext.value.trim();
        if value.is_empty() {
            return Ok(());
        }
        if !is_extension_key(&ext.key) || !is_single_line(value) {
            return self.reject(&ext.key, value);
        }
        push_line(out, &format!("{}: {value}", ext.key));
        Ok(())
    }

    /// Ok(true) when `value` passes `spec`'s validators, Ok(false) when a
    /// lenient codec drops it, Err when a strict codec rejects it.
    fn accept(&self, spec: &HeaderFieldSpec, value: &str) -> CabrilloResult<bool> {
        if is_single_line(value) && validate(value, &spec.validators) {
            return Ok(true);
        }
        self.reject(spec.line_key, value).map(|()| false)
    }

    fn reject(&self, key: &str, value: &str) -> CabrilloResult<()> {
        if self.is_strict() {
            return Err(CabrilloError::invalid(key, value));
        }
        warn!(key, value, "dropping invalid header value");
        Ok(())
    }
}

/// True for `X-` keys that survive a write/parse cycle as one header key.
fn is_extension_key(key: &str) -> bool {
    key.len() > EXTENSION_PREFIX.len()
        && key.starts_with(EXTENSION_PREFIX)
        && !key.contains(|c: char| c == ':' || c.is_whitespace())
}

fn is_single_line(value: &str) -> bool {
    !value.contains(['\n', '\r'])
}

fn qso_schema(doc: &LogDocument) -> CabrilloResult<SchemaKind> {
    let contest = doc
        .contest
        .as_deref()
        .ok_or(CabrilloError::Missing("contest"))?;
    schema_for(contest).ok_or_else(|| CabrilloError::invalid("CONTEST", contest))
}

/// Splits `KEY: value` on the first colon followed by whitespace.
fn split_header(line: &str) -> Option<(&str, &str)> {
    line.match_indices(':').find_map(|(idx, _)| {
        let rest = &line[idx + 1..];
        rest.starts_with(char::is_whitespace)
            .then(|| (&line[..idx], rest.trim()))
    })
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}
