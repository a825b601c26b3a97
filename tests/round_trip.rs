#![allow(clippy::unwrap_used, clippy::expect_used)]

use rustysdp::config::{Config, SdpConfig};
use rustysdp::log::NoopLogSink;
use rustysdp::sdp::{
    AddrType, FieldError, LineEnding, MediaKind, SdpError, SessionDescription, Serializer,
};
use std::fs;
use std::sync::Arc;

/// Reads a fixture from tests/sdp_test_files with CRLF line endings.
fn load_sdp_file(file_name: &str) -> String {
    let path = format!(
        "{}/tests/sdp_test_files/{}",
        env!("CARGO_MANIFEST_DIR"),
        file_name
    );
    let raw = fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path}: {e}"));
    raw.replace("\r\n", "\n").replace('\n', "\r\n")
}

#[test]
fn parse_example_sdp1() {
    let sdp = SessionDescription::parse(&load_sdp_file("deserialize_sdp_1.txt"))
        .expect("Failed to parse SDP");

    assert_eq!(sdp.version().unwrap().value(), 0);
    let origin = sdp.origin().unwrap();
    assert_eq!(origin.username(), "jdoe");
    assert_eq!(origin.session_id(), 2_890_844_526);
    assert_eq!(origin.session_version(), 2_890_842_807);
    assert_eq!(origin.addr_type(), AddrType::IP4);
    assert_eq!(sdp.session_name().unwrap().value(), "Example Session");
    assert_eq!(sdp.information().unwrap().value(), "A simple test session");
    assert_eq!(sdp.connection().unwrap().connection_address(), "203.0.113.1");
    assert_eq!(sdp.attribute("tool"), Some("libSDP"));

    let media = sdp.media_descriptions().unwrap();
    assert_eq!(media.len(), 1);
    assert_eq!(media[0].media().kind(), &MediaKind::Audio);
    assert_eq!(media[0].media().fmts(), ["0"]);
    assert_eq!(media[0].information().unwrap().value(), "Audio stream");
    assert_eq!(media[0].attribute("rtpmap"), Some("0 PCMU/8000"));
}

#[test]
fn parse_multiple_media() {
    let sdp = SessionDescription::parse(&load_sdp_file("deserialize_sdp_2.txt")).unwrap();

    let media = sdp.media_descriptions().unwrap();
    assert_eq!(media.len(), 2);

    assert_eq!(media[0].media().fmts(), ["0", "96"]);
    assert_eq!(media[0].attributes().unwrap().len(), 2);
    // First match only.
    assert_eq!(media[0].attribute("rtpmap"), Some("0 PCMU/8000"));

    assert_eq!(media[1].media().kind(), &MediaKind::Video);
    assert_eq!(media[1].bandwidth("AS"), Some(2000));
    assert!(media[1].has_attribute("sendrecv"));
    assert!(media[0].bandwidths().is_none());

    assert_eq!(sdp.attribute("group"), Some("BUNDLE 0 1"));
}

#[test]
fn parse_invalid_missing_origin() {
    let result = SessionDescription::parse(&load_sdp_file("deserialize_sdp_3.txt"));
    assert_eq!(result, Err(SdpError::Missing("o=")));
}

#[test]
fn parse_invalid_connection() {
    let result = SessionDescription::parse(&load_sdp_file("deserialize_sdp_4.txt"));
    assert_eq!(
        result,
        Err(SdpError::Parse {
            line: 4,
            source: FieldError::Invalid("c="),
        })
    );
}

#[test]
fn canonical_fixtures_reproduce_exactly() {
    for name in [
        "deserialize_sdp_1.txt",
        "deserialize_sdp_2.txt",
        "rfc4566_full.txt",
    ] {
        let text = load_sdp_file(name);
        let sdp = SessionDescription::parse(&text).unwrap();
        assert_eq!(sdp.encode().unwrap(), text, "fixture {name}");
    }
}

#[test]
fn rfc_example_is_scoped_correctly() {
    let sdp = SessionDescription::parse(&load_sdp_file("rfc4566_full.txt")).unwrap();

    let times = sdp.time_descriptions().unwrap();
    assert_eq!(times.len(), 2);
    assert_eq!(times[0].repeats().unwrap()[0].to_string(), "7d 1h 0 25h");
    assert_eq!(times[1].repeats().unwrap()[0].interval().as_seconds(), 604_800);
    assert_eq!(sdp.zones().unwrap()[0].adjustments().len(), 2);
    assert_eq!(sdp.key().unwrap().method(), "prompt");
    assert_eq!(sdp.bandwidth("CT"), Some(1000));

    let video = &sdp.media_descriptions().unwrap()[1];
    assert_eq!(video.media().port().num(), Some(2));
    assert_eq!(video.key().unwrap().key(), Some("s3cr3t"));
    assert_eq!(sdp.effective_connection(0).unwrap().connection_address(), "224.2.17.12/127");
    assert_eq!(sdp.effective_connection(1).unwrap().addr_type(), AddrType::IP6);
    assert_eq!(sdp.effective_key(0).unwrap().method(), "prompt");
    assert_eq!(sdp.effective_information(1).unwrap().value(), "Camera feed");
}

#[test]
fn out_of_order_input_is_written_canonically() {
    let sdp = SessionDescription::parse(&load_sdp_file("out_of_order.txt")).unwrap();
    assert_eq!(
        sdp.encode().unwrap(),
        "v=0\r\n\
         o=- 1 1 IN IP4 127.0.0.1\r\n\
         s=-\r\n\
         e=late@example.com\r\n\
         t=0 0\r\n\
         z=2882844526 -1h\r\n\
         a=tool:first\r\n\
         m=audio 5004 RTP/AVP 0\r\n"
    );
}

#[test]
fn repeat_before_time_is_a_structural_error() {
    let result = SessionDescription::parse(&load_sdp_file("repeat_before_time.txt"));
    assert_eq!(result, Err(SdpError::StructuralOrder("r=")));
}

#[test]
fn config_drives_parse_and_serialize() {
    let cfg: Config = "[sdp]\nline_ending = lf\nskip_invalid_lines = true\nmax_media = 1\n"
        .parse()
        .unwrap();
    let sdp_cfg = SdpConfig::from_config(&cfg).unwrap();

    let sdp = SessionDescription::parse_with(
        &load_sdp_file("deserialize_sdp_2.txt"),
        &sdp_cfg,
        Arc::new(NoopLogSink),
    )
    .unwrap();

    // The second m= exceeds the limit and its section is dropped whole.
    let media = sdp.media_descriptions().unwrap();
    assert_eq!(media.len(), 1);
    let audio = &media[0];
    assert_eq!(audio.media().kind(), &MediaKind::Audio);
    assert!(audio.bandwidths().is_none());
    assert!(!audio.has_attribute("sendrecv"));
    assert_eq!(audio.attributes().unwrap().len(), 2);
    assert_eq!(audio.attribute("rtpmap"), Some("0 PCMU/8000"));

    let text = Serializer::from_config(&sdp_cfg).serialize(&sdp).unwrap();
    assert_eq!(Serializer::from_config(&sdp_cfg).line_ending(), LineEnding::Lf);
    assert!(!text.contains('\r'));
    assert!(text.starts_with("v=0\no=- 4611731400430051336 2 IN IP4 127.0.0.1\n"));
}
