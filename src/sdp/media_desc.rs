use crate::sdp::attribute::Attribute;
use crate::sdp::bandwidth::Bandwidth;
use crate::sdp::connection::Connection;
use crate::sdp::key::Key;
use crate::sdp::keyed::keyed_helpers;
use crate::sdp::media::Media;
use crate::sdp::text::Information;
use crate::sdp::util::list_property;

/// One media section: the `m=` line and the media-level lines that follow it.
///
/// Every override is independent of the session level. An absent `i=`, `c=`
/// or `k=` here means "use the session value"; see
/// [`SessionDescription::effective_connection`](crate::sdp::SessionDescription::effective_connection).
/// The `b=` and `a=` lists start absent and are created on first append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaDescription {
    media: Media,
    information: Option<Information>,
    connection: Option<Connection>,
    key: Option<Key>,
    bandwidths: Option<Vec<Bandwidth>>,
    attributes: Option<Vec<Attribute>>,
}

impl MediaDescription {
    pub const fn new(media: Media) -> Self {
        Self {
            media,
            information: None,
            connection: None,
            key: None,
            bandwidths: None,
            attributes: None,
        }
    }

    // --- GETTERS ---

    pub const fn media(&self) -> &Media {
        &self.media
    }

    pub const fn media_mut(&mut self) -> &mut Media {
        &mut self.media
    }

    pub const fn information(&self) -> Option<&Information> {
        self.information.as_ref()
    }

    pub const fn connection(&self) -> Option<&Connection> {
        self.connection.as_ref()
    }

    pub const fn key(&self) -> Option<&Key> {
        self.key.as_ref()
    }

    // --- SETTERS ---

    pub fn set_media(&mut self, media: Media) {
        self.media = media;
    }

    pub fn set_information(&mut self, information: Information) {
        self.information = Some(information);
    }

    pub fn clear_information(&mut self) {
        self.information = None;
    }

    pub fn set_connection(&mut self, connection: Connection) {
        self.connection = Some(connection);
    }

    pub fn clear_connection(&mut self) {
        self.connection = None;
    }

    pub fn set_key(&mut self, key: Key) {
        self.key = Some(key);
    }

    pub fn clear_key(&mut self) {
        self.key = None;
    }

    list_property!(bandwidths, bandwidths_mut, set_bandwidths, add_bandwidth, Bandwidth);
    list_property!(attributes, attributes_mut, set_attributes, add_attribute, Attribute);

    keyed_helpers!();
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::MediaDescription;
    use crate::sdp::addr_type::AddrType;
    use crate::sdp::attribute::Attribute;
    use crate::sdp::bandwidth::Bandwidth;
    use crate::sdp::connection::Connection;
    use crate::sdp::media::Media;
    use crate::sdp::sdp_error::SdpError;
    use crate::sdp::text::Information;

    fn audio() -> MediaDescription {
        MediaDescription::new("audio 49170 RTP/AVP 0".parse::<Media>().unwrap())
    }

    #[test]
    fn starts_with_no_overrides_and_absent_lists() {
        let md = audio();
        assert!(md.information().is_none());
        assert!(md.connection().is_none());
        assert!(md.key().is_none());
        assert!(md.bandwidths().is_none());
        assert!(md.attributes().is_none());
    }

    #[test]
    fn bandwidths_mut_with_create_stores_an_empty_list() {
        let mut md = audio();
        assert!(md.bandwidths_mut(false).is_none());
        assert!(md.bandwidths().is_none());

        let list = md.bandwidths_mut(true).unwrap();
        assert!(list.is_empty());
        assert_eq!(md.bandwidths(), Some(&[][..]));
    }

    #[test]
    fn keyed_reads_first_and_writes_all() {
        let mut md = audio();
        md.add_attribute(Attribute::new("a", Some("1".to_string())));
        md.add_attribute(Attribute::new("a", Some("2".to_string())));
        md.add_attribute(Attribute::new("b", Some("3".to_string())));

        assert_eq!(md.attribute("a"), Some("1"));

        md.set_attribute("a", "9");
        let values: Vec<_> = md.attributes().unwrap().iter().map(Attribute::value).collect();
        assert_eq!(values, [Some("9"), Some("9"), Some("3")]);

        md.remove_attribute("a");
        assert_eq!(md.attributes().unwrap().len(), 1);
        assert_eq!(md.attribute("b"), Some("3"));

        md.set_attribute("missing", "x");
        md.remove_attribute("missing");
        assert_eq!(md.attributes().unwrap().len(), 1);
    }

    #[test]
    fn keyed_ops_on_absent_lists_are_no_ops() {
        let mut md = audio();
        assert_eq!(md.bandwidth("AS"), None);
        md.set_bandwidth("AS", 10);
        md.remove_bandwidth("AS");
        assert!(md.bandwidths().is_none());
        assert!(!md.has_attribute("sendrecv"));
    }

    #[test]
    fn flag_attribute_is_present_without_value() {
        let mut md = audio();
        md.add_attribute(Attribute::flag("sendrecv"));
        assert!(md.has_attribute("sendrecv"));
        assert_eq!(md.attribute("sendrecv"), None);
    }

    #[test]
    fn list_setters_clear_on_empty_and_reject_none() {
        let mut md = audio();
        md.add_bandwidth(Bandwidth::new("AS", 64));

        assert_eq!(
            md.set_bandwidths(None),
            Err(SdpError::InvalidArgument("bandwidths"))
        );
        assert_eq!(md.bandwidth("AS"), Some(64));

        md.set_bandwidths(Some(Vec::new())).unwrap();
        assert_eq!(md.bandwidths(), Some(&[][..]));
    }

    #[test]
    fn singleton_overrides_set_and_clear() {
        let mut md = audio();
        md.set_information(Information::new("Audio stream"));
        md.set_connection(Connection::new("IN", AddrType::IP4, "10.0.0.1"));
        assert_eq!(md.information().unwrap().value(), "Audio stream");
        assert_eq!(md.connection().unwrap().connection_address(), "10.0.0.1");

        md.clear_information();
        md.clear_connection();
        assert!(md.information().is_none());
        assert!(md.connection().is_none());
    }

    #[test]
    fn clone_is_independent() {
        let mut md = audio();
        md.add_attribute(Attribute::new("rtpmap", Some("0 PCMU/8000".to_string())));
        let copy = md.clone();

        md.set_attribute("rtpmap", "0 PCMA/8000");
        md.media_mut().add_fmt("8");

        assert_eq!(copy.attribute("rtpmap"), Some("0 PCMU/8000"));
        assert_eq!(copy.media().fmts(), ["0"]);
    }
}
