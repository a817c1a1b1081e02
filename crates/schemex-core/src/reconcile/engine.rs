//! Reconciliation engine.
//!
//! ## Logging Ownership
//!
//! `reconcile_versions` owns lifecycle logging (`log_op_start!`,
//! `log_op_end!`, `log_op_error!`). The generic [`reconcile`] only emits
//! `debug`/`warn` events for individual skipped names.

use crate::diff::{compare_entities, EntityDiff};
use crate::errors::{ExError, ExErrorKind, SchemexError};
use crate::model::CorpusIndex;
use crate::reconcile::model::{
    CorpusChangeSet, ReconcileReport, SkippedEntity, VersionComparison,
};
use crate::source::CorpusSource;
use crate::{log_op_end, log_op_error, log_op_start};
use futures::stream::{self, StreamExt};
use schemex_core_types::{RequestContext, TraceId};
use std::collections::{BTreeSet, HashSet};
use std::future::Future;
use std::num::NonZeroUsize;

/// Knobs for one reconciliation run
#[derive(Debug, Clone, Default)]
pub struct ReconcileOptions {
    /// Upper bound on in-flight comparisons; `None` runs every common name at once
    pub max_concurrency: Option<NonZeroUsize>,
    /// Correlation ids attached to log events and propagated errors
    pub context: RequestContext,
}

impl ReconcileOptions {
    pub fn with_max_concurrency(mut self, limit: usize) -> Self {
        self.max_concurrency = NonZeroUsize::new(limit);
        self
    }
}

/// Reconcile two entity-name lists.
///
/// `added` and `removed` come from set membership alone. Every name in both
/// lists is passed to `compare` exactly once (in `old_names` order, but
/// evaluated concurrently up to `options.max_concurrency`). A name lands in
/// `modified` only when its comparison succeeds with changes; failures are
/// recorded in `skipped` and never abort the run.
pub async fn reconcile<F, Fut, E>(
    old_names: &[String],
    new_names: &[String],
    compare: F,
    options: &ReconcileOptions,
) -> ReconcileReport
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<EntityDiff, E>>,
    E: Into<ExError>,
{
    let old_set: HashSet<&str> = old_names.iter().map(String::as_str).collect();
    let new_set: HashSet<&str> = new_names.iter().map(String::as_str).collect();

    let added: BTreeSet<String> = new_names
        .iter()
        .filter(|n| !old_set.contains(n.as_str()))
        .cloned()
        .collect();
    let removed: BTreeSet<String> = old_names
        .iter()
        .filter(|n| !new_set.contains(n.as_str()))
        .cloned()
        .collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let common: Vec<String> = old_names
        .iter()
        .filter(|n| new_set.contains(n.as_str()) && seen.insert(n.as_str()))
        .cloned()
        .collect();

    let limit = options
        .max_concurrency
        .map(NonZeroUsize::get)
        .unwrap_or(common.len())
        .max(1);

    let outcomes: Vec<(String, Result<EntityDiff, ExError>)> = stream::iter(common)
        .map(|name| {
            let comparison = compare(name.clone());
            async move { (name, comparison.await.map_err(Into::into)) }
        })
        .buffer_unordered(limit)
        .collect()
        .await;

    let mut modified = BTreeSet::new();
    let mut unchanged = 0usize;
    let mut skipped = Vec::new();

    for (name, outcome) in outcomes {
        match outcome {
            Ok(diff) if diff.has_changes => {
                modified.insert(name);
            }
            Ok(_) => unchanged += 1,
            Err(err) => {
                if err.kind() == ExErrorKind::NotFound {
                    tracing::debug!(
                        entity_name = %name,
                        err_code = err.code(),
                        request_id = %options.context.request_id,
                        trace_id = trace_field(&options.context),
                        "entity comparison skipped: document not found"
                    );
                } else {
                    tracing::warn!(
                        entity_name = %name,
                        err_code = err.code(),
                        request_id = %options.context.request_id,
                        trace_id = trace_field(&options.context),
                        error = %err,
                        "entity comparison skipped"
                    );
                }
                skipped.push(SkippedEntity {
                    name,
                    code: err.code().to_string(),
                    message: err.to_string(),
                });
            }
        }
    }
    skipped.sort_by(|a, b| a.name.cmp(&b.name));

    ReconcileReport {
        change_set: CorpusChangeSet {
            added,
            removed,
            modified,
        },
        unchanged,
        skipped,
    }
}

/// Reconcile two versions of a corpus served by `source`.
///
/// Each common entity is fetched from both versions concurrently and
/// compared with [`compare_entities`].
///
/// # Errors
///
/// - any error from `fetch_index` (the index is required)
/// - `NotFound`: `from` or `to` is not in the index
/// - `InvalidInput`: `from == to`
pub async fn reconcile_versions<S>(
    source: &S,
    from: &str,
    to: &str,
    options: &ReconcileOptions,
) -> Result<VersionComparison, ExError>
where
    S: CorpusSource + ?Sized,
{
    let context = &options.context;
    log_op_start!(
        "reconcile_versions",
        from_version = from,
        to_version = to,
        request_id = %context.request_id,
        trace_id = trace_field(context)
    );
    let start = std::time::Instant::now();

    let comparison = reconcile_versions_impl(source, from, to, options)
        .await
        .map_err(|e| {
            let e = attach_context(e, context);
            log_op_error!(
                "reconcile_versions",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = %context.request_id,
                trace_id = trace_field(context)
            );
            e
        })?;

    let change_set = &comparison.report.change_set;
    log_op_end!(
        "reconcile_versions",
        duration_ms = start.elapsed().as_millis() as u64,
        added = change_set.added.len() as u64,
        removed = change_set.removed.len() as u64,
        modified = change_set.modified.len() as u64,
        skipped = comparison.report.skipped.len() as u64,
        request_id = %context.request_id,
        trace_id = trace_field(context)
    );

    Ok(comparison)
}

/// Recorded only when the caller supplied a trace
fn trace_field(context: &RequestContext) -> Option<&str> {
    context.trace_id.as_ref().map(TraceId::as_str)
}

fn attach_context(err: ExError, context: &RequestContext) -> ExError {
    let err = err.with_request_id(context.request_id.clone());
    match &context.trace_id {
        Some(trace_id) => err.with_trace_id(trace_id.clone()),
        None => err,
    }
}

/// Check that `from` and `to` name two distinct versions of the index.
///
/// Returns the fetched index so callers do not read it twice.
///
/// # Errors
///
/// - `InvalidInput`: `from == to`
/// - any error from `fetch_index`
/// - `NotFound`: either version is missing from the index
async fn validate_version_pair<S>(
    source: &S,
    from: &str,
    to: &str,
    op: &'static str,
) -> Result<CorpusIndex, ExError>
where
    S: CorpusSource + ?Sized,
{
    if from == to {
        return Err(ExError::from(SchemexError::SameVersion {
            version: from.to_string(),
        })
        .with_op(op));
    }

    let index = source.fetch_index().await?;
    for version in [from, to] {
        if !index.contains_version(version) {
            return Err(ExError::from(SchemexError::VersionNotFound {
                version: version.to_string(),
            })
            .with_op(op));
        }
    }
    Ok(index)
}

async fn reconcile_versions_impl<S>(
    source: &S,
    from: &str,
    to: &str,
    options: &ReconcileOptions,
) -> Result<VersionComparison, ExError>
where
    S: CorpusSource + ?Sized,
{
    let index = validate_version_pair(source, from, to, "reconcile_versions").await?;
    let old_names = index.entity_names(from).unwrap_or_default();
    let new_names = index.entity_names(to).unwrap_or_default();

    let report = reconcile(
        old_names,
        new_names,
        |name| fetch_and_compare(source, from, to, name),
        options,
    )
    .await;

    Ok(VersionComparison {
        from_version: from.to_string(),
        to_version: to.to_string(),
        report,
    })
}

async fn fetch_and_compare<S>(
    source: &S,
    from: &str,
    to: &str,
    name: String,
) -> Result<EntityDiff, ExError>
where
    S: CorpusSource + ?Sized,
{
    let (old, new) = futures::try_join!(
        source.fetch_entity(from, &name),
        source.fetch_entity(to, &name)
    )?;
    Ok(compare_entities(&old, &new))
}

/// Diff a single entity between two versions.
///
/// The version pair is checked the same way [`reconcile_versions`] checks
/// it before either document is fetched.
///
/// # Errors
///
/// - `InvalidInput`: `from == to`
/// - `NotFound`: either version is missing from the index
/// - fetch failures for either side propagate unchanged
pub async fn diff_entity_versions<S>(
    source: &S,
    from: &str,
    to: &str,
    name: &str,
) -> Result<EntityDiff, ExError>
where
    S: CorpusSource + ?Sized,
{
    validate_version_pair(source, from, to, "diff_entity_versions").await?;
    let diff = fetch_and_compare(source, from, to, name.to_string()).await?;
    tracing::debug!(
        entity_name = name,
        from_version = from,
        to_version = to,
        has_changes = diff.has_changes,
        "entity diff computed"
    );
    Ok(diff)
}
