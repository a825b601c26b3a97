use crate::config::SdpConfig;
use crate::log::log_sink::LogSink;
use crate::sdp::attribute::Attribute;
use crate::sdp::bandwidth::Bandwidth;
use crate::sdp::connection::Connection;
use crate::sdp::key::Key;
use crate::sdp::keyed::keyed_helpers;
use crate::sdp::media_desc::MediaDescription;
use crate::sdp::origin::Origin;
use crate::sdp::parser::{self, LineParser};
use crate::sdp::sdp_error::{Result, SdpError};
use crate::sdp::serializer::Serializer;
use crate::sdp::text::{Email, Information, Phone, SessionName, Uri, Version};
use crate::sdp::time_desc::TimeDescription;
use crate::sdp::timing::Zone;
use crate::sdp::util::list_property;
use std::str::FromStr;
use std::sync::Arc;

/// In-memory model of one SDP body.
///
/// `v=`, `o=` and `s=` are optional until the model is complete; every list
/// starts present and empty and keeps arrival order, duplicates included.
/// `Clone` copies the whole tree, so a clone never observes later mutation
/// of the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDescription {
    version: Option<Version>,
    origin: Option<Origin>,
    session_name: Option<SessionName>,
    information: Option<Information>,
    uri: Option<Uri>,
    connection: Option<Connection>,
    key: Option<Key>,
    emails: Option<Vec<Email>>,
    phones: Option<Vec<Phone>>,
    bandwidths: Option<Vec<Bandwidth>>,
    attributes: Option<Vec<Attribute>>,
    zones: Option<Vec<Zone>>,
    time_descriptions: Option<Vec<TimeDescription>>,
    media_descriptions: Option<Vec<MediaDescription>>,
}

impl Default for SessionDescription {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionDescription {
    pub const fn new() -> Self {
        Self {
            version: None,
            origin: None,
            session_name: None,
            information: None,
            uri: None,
            connection: None,
            key: None,
            emails: Some(Vec::new()),
            phones: Some(Vec::new()),
            bandwidths: Some(Vec::new()),
            attributes: Some(Vec::new()),
            zones: Some(Vec::new()),
            time_descriptions: Some(Vec::new()),
            media_descriptions: Some(Vec::new()),
        }
    }

    /// Parses a complete body with the default configuration.
    ///
    /// # Errors
    /// The first line that fails to classify or attach, or a missing
    /// `v=`/`o=`/`s=` at the end.
    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_with(input, &SdpConfig::default(), Arc::new(crate::log::NoopLogSink))
    }

    /// Parses a complete body, honoring `config` and reporting through `sink`.
    ///
    /// # Errors
    /// See [`parse`](Self::parse). With `skip_invalid_lines` set, only the
    /// final completeness check can fail.
    pub fn parse_with(input: &str, config: &SdpConfig, sink: Arc<dyn LogSink>) -> Result<Self> {
        parser::parse_with(input, &LineParser, config, sink)
    }

    /// Canonical text with CRLF line endings.
    ///
    /// # Errors
    /// [`SdpError::FieldEncoding`] if a payload cannot be written as one line.
    pub fn encode(&self) -> Result<String> {
        Serializer::default().serialize(self)
    }

    /// Checks that the mandatory `v=`, `o=` and `s=` lines are present.
    ///
    /// # Errors
    /// [`SdpError::Missing`] naming the first absent line.
    pub fn check_complete(&self) -> Result<()> {
        if self.version.is_none() {
            return Err(SdpError::Missing("v="));
        }
        if self.origin.is_none() {
            return Err(SdpError::Missing("o="));
        }
        if self.session_name.is_none() {
            return Err(SdpError::Missing("s="));
        }
        Ok(())
    }

    // --- GETTERS ---

    pub const fn version(&self) -> Option<&Version> {
        self.version.as_ref()
    }

    pub const fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub const fn session_name(&self) -> Option<&SessionName> {
        self.session_name.as_ref()
    }

    pub const fn information(&self) -> Option<&Information> {
        self.information.as_ref()
    }

    pub const fn uri(&self) -> Option<&Uri> {
        self.uri.as_ref()
    }

    pub const fn connection(&self) -> Option<&Connection> {
        self.connection.as_ref()
    }

    pub const fn key(&self) -> Option<&Key> {
        self.key.as_ref()
    }

    // --- SETTERS ---

    pub const fn set_version(&mut self, version: Version) {
        self.version = Some(version);
    }

    pub fn set_origin(&mut self, origin: Origin) {
        self.origin = Some(origin);
    }

    pub fn set_session_name(&mut self, session_name: SessionName) {
        self.session_name = Some(session_name);
    }

    pub fn set_information(&mut self, information: Information) {
        self.information = Some(information);
    }

    pub fn clear_information(&mut self) {
        self.information = None;
    }

    pub fn set_uri(&mut self, uri: Uri) {
        self.uri = Some(uri);
    }

    pub fn clear_uri(&mut self) {
        self.uri = None;
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

    // --- LISTS ---

    list_property!(emails, emails_mut, set_emails, add_email, Email);
    list_property!(phones, phones_mut, set_phones, add_phone, Phone);
    list_property!(bandwidths, bandwidths_mut, set_bandwidths, add_bandwidth, Bandwidth);
    list_property!(attributes, attributes_mut, set_attributes, add_attribute, Attribute);
    list_property!(zones, zones_mut, set_zones, add_zone, Zone);
    list_property!(
        time_descriptions,
        time_descriptions_mut,
        set_time_descriptions,
        add_time_description,
        TimeDescription
    );
    list_property!(
        media_descriptions,
        media_descriptions_mut,
        set_media_descriptions,
        add_media_description,
        MediaDescription
    );

    keyed_helpers!();

    // --- MEDIA-LEVEL RESOLUTION ---

    fn media_at(&self, index: usize) -> Option<&MediaDescription> {
        self.media_descriptions.as_deref()?.get(index)
    }

    /// `c=` in effect for media section `index`: its own, else the session's.
    /// `None` when the index is out of range or neither level has one.
    pub fn effective_connection(&self, index: usize) -> Option<&Connection> {
        let md = self.media_at(index)?;
        md.connection().or(self.connection.as_ref())
    }

    pub fn effective_key(&self, index: usize) -> Option<&Key> {
        let md = self.media_at(index)?;
        md.key().or(self.key.as_ref())
    }

    pub fn effective_information(&self, index: usize) -> Option<&Information> {
        let md = self.media_at(index)?;
        md.information().or(self.information.as_ref())
    }
}

impl FromStr for SessionDescription {
    type Err = SdpError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
