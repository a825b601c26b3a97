//! Raw text to fields.
//!
//! [`FieldParser`] is the seam between tokenizing and assembly. The bundled
//! [`LineParser`] handles the fifteen RFC 4566 line types; a host with its own
//! tokenizer can plug it in and reuse the rest of the pipeline.

use crate::config::SdpConfig;
use crate::log::log_sink::LogSink;
use crate::sdp::assembler::SessionAssembler;
use crate::sdp::field::{Field, FieldKind};
use crate::sdp::sdp_error::{FieldError, Result, SdpError};
use crate::sdp::session::SessionDescription;
use crate::{sink_debug, sink_warn};
use std::sync::Arc;

pub trait FieldParser {
    /// Classifies one line with its terminator already removed.
    fn parse_field(&self, line: &str) -> std::result::Result<Field, FieldError>;
}

/// Default classifier: `<letter>=<value>` with the value parsed by the
/// payload type's `FromStr`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineParser;

impl FieldParser for LineParser {
    fn parse_field(&self, line: &str) -> std::result::Result<Field, FieldError> {
        line.parse()
    }
}

/// Splits `input` into lines, classifies each one and assembles the result.
///
/// Both `\r\n` and bare `\n` terminate a line; blank lines are ignored.
/// Line numbers in errors are 1-based.
///
/// # Errors
/// - [`SdpError::Parse`] for a line `parser` rejects.
/// - Any error from [`SessionAssembler::attach`].
/// - [`SdpError::Missing`] if `v=`, `o=` or `s=` never appeared.
///
/// With `config.skip_invalid_lines` the first two are logged and the line
/// is dropped instead. Dropping an `m=` line also drops the media-level
/// lines (`i= c= b= k= a=`) up to the next `m=`, so they never land on an
/// earlier section.
pub fn parse_with<P>(
    input: &str,
    parser: &P,
    config: &SdpConfig,
    sink: Arc<dyn LogSink>,
) -> Result<SessionDescription>
where
    P: FieldParser + ?Sized,
{
    let mut asm = SessionAssembler::with_config(config, sink.clone());
    let mut in_dropped_media = false;

    for (n, raw) in input.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.trim().is_empty() {
            continue;
        }
        let lineno = n + 1;

        let field = match parser.parse_field(line) {
            Ok(field) => field,
            Err(source) => {
                let e = SdpError::Parse {
                    line: lineno,
                    source,
                };
                if !config.skip_invalid_lines {
                    return Err(e);
                }
                sink_warn!(sink, "[SDP] skipping line {}: {}", lineno, e);
                if starts_media(line) {
                    in_dropped_media = true;
                }
                continue;
            }
        };

        let kind = field.kind();
        if kind == FieldKind::Media {
            in_dropped_media = false;
        } else if in_dropped_media && kind.is_media_level() {
            sink_debug!(sink, "[SDP] dropping line {} of a skipped media section", lineno);
            continue;
        }

        if let Err(e) = asm.attach(field) {
            if !config.skip_invalid_lines {
                return Err(e);
            }
            sink_warn!(sink, "[SDP] skipping line {}: {}", lineno, e);
            if kind == FieldKind::Media {
                in_dropped_media = true;
            }
        }
    }

    let model = asm.finish()?;
    sink_debug!(
        sink,
        "[SDP] parsed {} media section(s)",
        model.media_descriptions().map_or(0, <[_]>::len)
    );
    Ok(model)
}

fn starts_media(line: &str) -> bool {
    line.chars()
        .next()
        .map(|c| c.to_ascii_lowercase())
        .and_then(FieldKind::from_letter)
        == Some(FieldKind::Media)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::{FieldParser, LineParser, parse_with};
    use crate::config::SdpConfig;
    use crate::log::NoopLogSink;
    use crate::sdp::field::Field;
    use crate::sdp::sdp_error::{FieldError, SdpError};
    use std::sync::Arc;

    const BASIC: &str = "v=0\r\no=- 1 1 IN IP4 127.0.0.1\r\ns=-\r\nt=0 0\r\n";

    #[test]
    fn line_parser_delegates_to_field() {
        let f = LineParser.parse_field("a=sendrecv").unwrap();
        assert_eq!(f.to_string(), "a=sendrecv");
    }

    #[test]
    fn accepts_lf_and_blank_lines() {
        let input = "v=0\n\no=- 1 1 IN IP4 127.0.0.1\ns=-\n\n";
        let sd = parse_with(input, &LineParser, &SdpConfig::default(), Arc::new(NoopLogSink))
            .unwrap();
        assert_eq!(sd.session_name().unwrap().value(), "-");
    }

    #[test]
    fn reports_one_based_line_number() {
        let input = format!("{BASIC}x=unknown\r\n");
        let err = parse_with(&input, &LineParser, &SdpConfig::default(), Arc::new(NoopLogSink))
            .unwrap_err();
        assert_eq!(
            err,
            SdpError::Parse {
                line: 5,
                source: FieldError::UnknownType('x'),
            }
        );
    }

    #[test]
    fn skip_invalid_lines_drops_bad_lines() {
        let config = SdpConfig {
            skip_invalid_lines: true,
            ..SdpConfig::default()
        };
        let input = format!("{BASIC}x=unknown\r\nr=1 1\r\na=tool:ok\r\n");
        let sd = parse_with(&input, &LineParser, &config, Arc::new(NoopLogSink)).unwrap();
        assert_eq!(sd.attribute("tool"), Some("ok"));
        assert!(sd.time_descriptions().unwrap()[0].repeats().unwrap().is_empty());
    }

    #[test]
    fn lines_of_a_rejected_media_section_are_dropped() {
        let config = SdpConfig {
            max_media: Some(1),
            skip_invalid_lines: true,
            ..SdpConfig::default()
        };
        let input = format!(
            "{BASIC}m=audio 5004 RTP/AVP 0\r\nc=IN IP4 10.0.0.1\r\na=rtpmap:0 PCMU/8000\r\n\
             m=video 5006 RTP/AVP 97\r\nc=IN IP4 10.0.0.2\r\nb=AS:500\r\na=rtpmap:97 VP8/90000\r\n\
             e=ops@example.com\r\n"
        );
        let sd = parse_with(&input, &LineParser, &config, Arc::new(NoopLogSink)).unwrap();

        let media = sd.media_descriptions().unwrap();
        assert_eq!(media.len(), 1);
        assert_eq!(media[0].connection().unwrap().connection_address(), "10.0.0.1");
        assert_eq!(media[0].attributes().unwrap().len(), 1);
        assert!(media[0].bandwidths().is_none());
        // Session-level lines after the dropped section still attach.
        assert_eq!(sd.emails().unwrap().len(), 1);
        assert_eq!(
            sd.encode().unwrap(),
            "v=0\r\no=- 1 1 IN IP4 127.0.0.1\r\ns=-\r\ne=ops@example.com\r\nt=0 0\r\n\
             m=audio 5004 RTP/AVP 0\r\nc=IN IP4 10.0.0.1\r\na=rtpmap:0 PCMU/8000\r\n"
        );
    }

    #[test]
    fn unparseable_media_line_drops_its_section() {
        let config = SdpConfig {
            skip_invalid_lines: true,
            ..SdpConfig::default()
        };
        let input = format!(
            "{BASIC}m=audio 5004 RTP/AVP 0\r\nm=video notaport RTP/AVP 97\r\na=recvonly\r\n\
             m=text 5008 RTP/AVP 98\r\na=sendonly\r\n"
        );
        let sd = parse_with(&input, &LineParser, &config, Arc::new(NoopLogSink)).unwrap();

        let media = sd.media_descriptions().unwrap();
        assert_eq!(media.len(), 2);
        assert!(media[0].attributes().is_none());
        assert!(media[1].has_attribute("sendonly"));
    }

    #[test]
    fn repeat_before_time_surfaces_structural_error() {
        let input = "v=0\r\nr=7d 1h 0\r\n";
        let err = parse_with(input, &LineParser, &SdpConfig::default(), Arc::new(NoopLogSink))
            .unwrap_err();
        assert_eq!(err, SdpError::StructuralOrder("r="));
    }

    struct UpperCaseParser;

    impl FieldParser for UpperCaseParser {
        fn parse_field(&self, line: &str) -> Result<Field, FieldError> {
            let (letter, rest) = line.split_at(1);
            format!("{}{rest}", letter.to_ascii_lowercase()).parse()
        }
    }

    #[test]
    fn custom_parsers_plug_in() {
        let sd = parse_with(
            "V=0\nO=- 1 1 IN IP4 127.0.0.1\nS=X\n",
            &UpperCaseParser,
            &SdpConfig::default(),
            Arc::new(NoopLogSink),
        )
        .unwrap();
        assert_eq!(sd.session_name().unwrap().value(), "X");
    }
}
