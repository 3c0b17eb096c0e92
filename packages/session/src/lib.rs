#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Map view session.
//!
//! [`MapSession`] is the UI-agnostic core of the map screen: it holds the
//! current form state and working set, re-runs the filter pipeline against
//! a fresh snapshot on demand, and projects the working set onto whatever
//! [`MapSurface`] the host provides. A UI layer on top of this is pure
//! event wiring: edit the form, call [`MapSession::refilter`], surface the
//! returned field errors, and call [`MapSession::map_records`] on request.

use crime_view_filter::{FieldError, FilterForm};
use crime_view_map::{MapSurface, ProjectError, ProjectorConfig};
use crime_view_records::RecordStore;
use crime_view_records_models::CrimeRecord;

/// One user's map screen: form state, working set, and projector limits.
///
/// The session borrows the store and re-fetches an owned snapshot on every
/// [`Self::refilter`], so filtering never observes (or causes) mutation of
/// the shared dataset.
#[derive(Debug)]
pub struct MapSession<'a> {
    store: &'a RecordStore,
    form: FilterForm,
    config: ProjectorConfig,
    working_set: Vec<CrimeRecord>,
    errors: Vec<FieldError>,
}

impl<'a> MapSession<'a> {
    /// Opens a session over the store with an empty form; the working set
    /// starts as the full snapshot.
    #[must_use]
    pub fn new(store: &'a RecordStore) -> Self {
        Self::with_config(store, ProjectorConfig::default())
    }

    /// Opens a session with explicit projector limits.
    #[must_use]
    pub fn with_config(store: &'a RecordStore, config: ProjectorConfig) -> Self {
        Self {
            store,
            form: FilterForm::default(),
            config,
            working_set: store.local_copy(),
            errors: Vec::new(),
        }
    }

    /// The current form state, for the UI layer to edit between refilters.
    pub const fn form_mut(&mut self) -> &mut FilterForm {
        &mut self.form
    }

    /// The current form state.
    #[must_use]
    pub const fn form(&self) -> &FilterForm {
        &self.form
    }

    /// Records currently matching the applied filters, in snapshot order.
    #[must_use]
    pub fn working_set(&self) -> &[CrimeRecord] {
        &self.working_set
    }

    /// Field errors from the most recent [`Self::refilter`].
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Re-fetches the full snapshot and reapplies the filter pipeline.
    ///
    /// Returns the field errors for the UI to surface; the working set is
    /// always replaced, with each malformed bound treated as absent.
    pub fn refilter(&mut self) -> &[FieldError] {
        let snapshot = self.store.local_copy();
        let outcome = crime_view_filter::apply(snapshot, &self.form);
        log::debug!(
            "Filter pass: {} of {} records retained, {} field errors",
            outcome.records.len(),
            self.store.len(),
            outcome.errors.len()
        );
        self.working_set = outcome.records;
        self.errors = outcome.errors;
        &self.errors
    }

    /// Projects the current working set onto the surface.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::InvalidCount`] if `raw_count` is not a
    /// number within the configured ceiling; no markers are touched then.
    pub fn map_records(
        &self,
        surface: &mut dyn MapSurface,
        raw_count: &str,
    ) -> Result<usize, ProjectError> {
        crime_view_map::project(surface, &self.working_set, raw_count, &self.config)
    }
}
