//! Builds a [`SessionDescription`] from classified fields.
//!
//! The assembler keeps two context slots: the media section opened by the
//! last `m=` line and the time description opened by the last `t=` line.
//! Fields that may appear at either level go to the open media section if
//! there is one, otherwise to the session.

use crate::config::SdpConfig;
use crate::log::NoopLogSink;
use crate::log::log_sink::LogSink;
use crate::sdp::field::Field;
use crate::sdp::media_desc::MediaDescription;
use crate::sdp::sdp_error::{Result, SdpError};
use crate::sdp::session::SessionDescription;
use crate::sdp::time_desc::TimeDescription;
use crate::{sink_debug, sink_warn};
use std::sync::Arc;

pub struct SessionAssembler {
    model: SessionDescription,
    current_media: Option<usize>,
    current_time: Option<usize>,
    max_media: Option<usize>,
    sink: Arc<dyn LogSink>,
}

impl Default for SessionAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionAssembler {
    pub fn new() -> Self {
        Self::with_sink(Arc::new(NoopLogSink))
    }

    pub fn with_sink(sink: Arc<dyn LogSink>) -> Self {
        Self {
            model: SessionDescription::new(),
            current_media: None,
            current_time: None,
            max_media: None,
            sink,
        }
    }

    pub fn with_config(config: &SdpConfig, sink: Arc<dyn LogSink>) -> Self {
        let mut asm = Self::with_sink(sink);
        asm.max_media = config.max_media;
        asm
    }

    // --- GETTERS ---

    pub const fn model(&self) -> &SessionDescription {
        &self.model
    }

    /// Index of the media section that media-level fields currently go to.
    pub const fn current_media(&self) -> Option<usize> {
        self.current_media
    }

    /// Index of the time description that `r=` lines currently go to.
    pub const fn current_time(&self) -> Option<usize> {
        self.current_time
    }

    /// Adds one field to the model.
    ///
    /// The payload is validated before anything is touched, so a failed
    /// attach leaves the model and both context slots unchanged.
    ///
    /// # Errors
    /// - [`SdpError::FieldEncoding`] if the payload cannot be written as one line.
    /// - [`SdpError::StructuralOrder`] for `r=` before any `t=`.
    /// - [`SdpError::LimitExceeded`] for an `m=` past the configured limit.
    pub fn attach(&mut self, field: Field) -> Result<()> {
        field.validate().map_err(|source| SdpError::FieldEncoding {
            field: field.to_string(),
            source,
        })?;
        sink_debug!(self.sink, "[SDP] attach {}", field.kind());

        match field {
            Field::Version(v) => {
                self.warn_if_replacing(self.model.version().is_some(), "v=");
                self.model.set_version(v);
            }
            Field::Origin(o) => {
                self.warn_if_replacing(self.model.origin().is_some(), "o=");
                self.model.set_origin(o);
            }
            Field::SessionName(s) => {
                self.warn_if_replacing(self.model.session_name().is_some(), "s=");
                self.model.set_session_name(s);
            }
            Field::Information(i) => match self.open_media() {
                Some(md) => md.set_information(i),
                None => self.model.set_information(i),
            },
            Field::Connection(c) => match self.open_media() {
                Some(md) => md.set_connection(c),
                None => self.model.set_connection(c),
            },
            Field::Key(k) => match self.open_media() {
                Some(md) => md.set_key(k),
                None => self.model.set_key(k),
            },
            Field::Uri(u) => self.model.set_uri(u),
            Field::Email(e) => self.model.add_email(e),
            Field::Phone(p) => self.model.add_phone(p),
            Field::Zone(z) => self.model.add_zone(z),
            Field::Time(t) => {
                self.model.add_time_description(TimeDescription::new(t));
                self.current_time = last_index(self.model.time_descriptions());
            }
            Field::Repeat(r) => {
                let idx = self.current_time.ok_or(SdpError::StructuralOrder("r="))?;
                let td = self
                    .model
                    .time_descriptions_mut(false)
                    .and_then(|list| list.get_mut(idx))
                    .ok_or(SdpError::StructuralOrder("r="))?;
                td.add_repeat(r);
            }
            Field::Bandwidth(b) => match self.open_media() {
                Some(md) => md.add_bandwidth(b),
                None => self.model.add_bandwidth(b),
            },
            Field::Attribute(a) => match self.open_media() {
                Some(md) => md.add_attribute(a),
                None => self.model.add_attribute(a),
            },
            Field::Media(m) => {
                let count = self.model.media_descriptions().map_or(0, <[MediaDescription]>::len);
                if let Some(max) = self.max_media.filter(|&max| count >= max) {
                    return Err(SdpError::LimitExceeded(max));
                }
                self.model.add_media_description(MediaDescription::new(m));
                self.current_media = last_index(self.model.media_descriptions());
            }
        }
        Ok(())
    }

    /// Attaches fields in order, stopping at the first failure.
    ///
    /// # Errors
    /// The error of the first field that could not be attached.
    pub fn attach_all<I>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = Field>,
    {
        fields.into_iter().try_for_each(|f| self.attach(f))
    }

    /// Returns the model once `v=`, `o=` and `s=` have all been seen.
    ///
    /// # Errors
    /// [`SdpError::Missing`] naming the first absent line.
    pub fn finish(self) -> Result<SessionDescription> {
        self.model.check_complete()?;
        Ok(self.model)
    }

    /// Returns the model as built so far, complete or not.
    pub fn into_model(self) -> SessionDescription {
        self.model
    }

    fn open_media(&mut self) -> Option<&mut MediaDescription> {
        let idx = self.current_media?;
        self.model.media_descriptions_mut(false)?.get_mut(idx)
    }

    fn warn_if_replacing(&self, present: bool, what: &str) {
        if present {
            sink_warn!(self.sink, "[SDP] duplicate {} line, keeping the last one", what);
        }
    }
}

fn last_index<T>(list: Option<&[T]>) -> Option<usize> {
    list?.len().checked_sub(1)
}
