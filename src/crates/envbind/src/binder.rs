//! Record binding
//!
//! A [`Schema`] lists the fields of a record in declaration order, each
//! with its [`FieldDescriptor`] and an accessor returning the field's
//! [`Slot`]. Binding walks the schema once: every field is resolved and
//! dispatched, and every failure is collected instead of stopping at the
//! first one. Fields processed before a failing field stay populated.
//!
//! Records usually get their schema from [`env_record!`](crate::env_record):
//!
//! ```rust
//! use envbind::{env_record, field, EnvRecord, MapEnv};
//!
//! #[derive(Debug, Default)]
//! struct Server {
//!     host: String,
//!     port: u16,
//! }
//!
//! env_record!(Server {
//!     host => field("HOST").default_value("localhost"),
//!     port => field("PORT").min("1024"),
//! });
//!
//! let env = MapEnv::new().with("PORT", "8080");
//! let server = Server::from_source(&env).unwrap();
//! assert_eq!(server.host, "localhost");
//! assert_eq!(server.port, 8080);
//! ```

use crate::config::{BindOptions, EnvSource, ProcessEnv};
use crate::descriptor::FieldDescriptor;
use crate::dispatch::dispatch;
use crate::error::{BindError, Diagnostics, Error, FieldError, Result};
use crate::logging::LogGuard;
use crate::parse::FieldContext;
use crate::resolve::{resolve_field, Resolved};
use crate::shape::Slot;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};

type SlotFn<R> = Box<dyn for<'a> Fn(&'a mut R) -> Slot<'a> + Send + Sync>;

/// One field of a record schema
pub struct FieldBinding<R> {
    name: &'static str,
    descriptor: FieldDescriptor,
    slot: SlotFn<R>,
}

impl<R> FieldBinding<R> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    fn bind(
        &self,
        record: &mut R,
        source: &dyn EnvSource,
        options: &BindOptions,
    ) -> std::result::Result<(), BindError> {
        let raw = match resolve_field(self.name, &self.descriptor, source, options)? {
            Resolved::Skip => return Ok(()),
            Resolved::Raw(raw) => raw,
        };

        let field = FieldContext::new(self.name, &self.descriptor, options);
        dispatch((self.slot)(record), &raw, &field)
    }
}

impl<R> fmt::Debug for FieldBinding<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinding")
            .field("name", &self.name)
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// Static description of a record: its fields in declaration order
pub struct Schema<R> {
    record: &'static str,
    fields: Vec<FieldBinding<R>>,
}

impl<R: 'static> Schema<R> {
    pub fn new(record: &'static str) -> Self {
        Self {
            record,
            fields: Vec::new(),
        }
    }

    /// Append a field
    ///
    /// `slot` borrows the field out of the record, usually
    /// `|r| r.port.slot()`.
    pub fn field<F>(mut self, name: &'static str, descriptor: FieldDescriptor, slot: F) -> Self
    where
        F: for<'a> Fn(&'a mut R) -> Slot<'a> + Send + Sync + 'static,
    {
        self.fields.push(FieldBinding {
            name,
            descriptor,
            slot: Box::new(slot),
        });
        self
    }

    pub fn record(&self) -> &'static str {
        self.record
    }

    pub fn fields(&self) -> &[FieldBinding<R>] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Bind every field of `record` from `source`
    ///
    /// # Arguments
    ///
    /// * `record` - Record to fill in place
    /// * `source` - Environment to read from
    /// * `options` - Delimiter, skip sentinel and diagnostic separator
    ///
    /// # Returns
    ///
    /// * `Ok(())` if every field was bound or skipped
    /// * `Err(Error::Fields)` listing every failed field in declaration order;
    ///   fields that succeeded keep their new values
    pub fn bind(&self, record: &mut R, source: &dyn EnvSource, options: &BindOptions) -> Result<()> {
        let _guard = LogGuard::new(format!("bind {}", self.record));
        let mut diagnostics = Diagnostics::with_separator(options.separator.clone());

        for binding in &self.fields {
            if let Err(error) = binding.bind(record, source, options) {
                warn!(
                    record = self.record,
                    field = binding.name,
                    code = error.code(),
                    "Failed to bind field: {}",
                    error
                );
                diagnostics.push(FieldError {
                    field: binding.name.to_string(),
                    env: binding.descriptor.env.clone(),
                    error,
                });
            }
        }

        debug!(
            "Bound {} ({} fields, {} failed)",
            self.record,
            self.fields.len(),
            diagnostics.len()
        );

        if diagnostics.is_empty() {
            Ok(())
        } else {
            Err(Error::Fields(diagnostics))
        }
    }
}

impl<R> fmt::Debug for Schema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("record", &self.record)
            .field("fields", &self.fields)
            .finish()
    }
}

/// A record whose fields can be bound from an environment
///
/// Implement [`schema`](EnvRecord::schema) by hand or through
/// [`env_record!`](crate::env_record); the remaining methods are provided.
pub trait EnvRecord: Sized + 'static {
    fn schema() -> Schema<Self>;

    /// Build from the defaults and the process environment
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_source(&ProcessEnv)
    }

    /// Build from the defaults and `source`
    fn from_source<S: EnvSource + ?Sized>(source: &S) -> Result<Self>
    where
        Self: Default,
    {
        let mut record = Self::default();
        record.bind_from(source)?;
        Ok(record)
    }

    /// Bind into an existing value, leaving unbound fields untouched
    fn bind_from<S: EnvSource + ?Sized>(&mut self, source: &S) -> Result<()> {
        Self::schema().bind(self, &source, &BindOptions::default())
    }
}

type ErasedBind = fn(&mut dyn Any, &dyn EnvSource, &BindOptions) -> Result<()>;

/// Binds records from one environment source with shared options
///
/// Besides the typed [`bind`](Binder::bind), a binder keeps a table of
/// registered record types so that [`bind_any`](Binder::bind_any) can fill
/// a target known only as `&mut dyn Any`.
pub struct Binder<S> {
    source: S,
    options: BindOptions,
    registry: HashMap<TypeId, ErasedBind>,
}

impl Binder<ProcessEnv> {
    /// Binder reading the process environment
    pub fn from_process_env() -> Self {
        Self::new(ProcessEnv)
    }
}

impl<S: EnvSource> Binder<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            options: BindOptions::default(),
            registry: HashMap::new(),
        }
    }

    pub fn with_options(mut self, options: BindOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &BindOptions {
        &self.options
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Make `R` bindable through [`bind_any`](Binder::bind_any)
    pub fn register<R: EnvRecord>(mut self) -> Self {
        self.registry.insert(TypeId::of::<R>(), bind_erased::<R>);
        self
    }

    pub fn is_registered<R: EnvRecord>(&self) -> bool {
        self.registry.contains_key(&TypeId::of::<R>())
    }

    /// Bind every field of `record`
    pub fn bind<R: EnvRecord>(&self, record: &mut R) -> Result<()> {
        R::schema().bind(record, &self.source, &self.options)
    }

    /// Build `R` from its defaults
    pub fn load<R: EnvRecord + Default>(&self) -> Result<R> {
        let mut record = R::default();
        self.bind(&mut record)?;
        Ok(record)
    }

    /// Bind a target whose type is only known at runtime
    ///
    /// # Arguments
    ///
    /// * `target` - Record registered through [`register`](Binder::register)
    ///
    /// # Returns
    ///
    /// * `Ok(())` if every field was bound or skipped
    /// * `Err(Error::NotARecordReference)` before any field is read if the
    ///   target's type was never registered
    /// * `Err(Error::Fields)` with the failed fields otherwise
    pub fn bind_any(&self, target: &mut dyn Any) -> Result<()> {
        let type_id = (*target).type_id();
        match self.registry.get(&type_id) {
            Some(bind) => bind(target, &self.source, &self.options),
            None => {
                debug!("No record registered for {:?}", type_id);
                Err(Error::NotARecordReference)
            }
        }
    }
}

fn bind_erased<R: EnvRecord>(
    target: &mut dyn Any,
    source: &dyn EnvSource,
    options: &BindOptions,
) -> Result<()> {
    let record = target
        .downcast_mut::<R>()
        .ok_or(Error::NotARecordReference)?;
    R::schema().bind(record, source, options)
}

impl<S> fmt::Debug for Binder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binder")
            .field("options", &self.options)
            .field("registered", &self.registry.len())
            .finish_non_exhaustive()
    }
}
