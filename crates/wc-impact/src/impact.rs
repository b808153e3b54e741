//! Bucketing of products after a hardware change.

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;
use wc_catalog::CobotRating;
use wc_project::{DrawerSlot, HardwareConfig, Product, ProductConfig, ProductState};
use wc_rules::{ErrorTree, ValidationContext, resolve_reach_tested, validate_product};

use crate::resync::resync_config;

/// A proposed hardware change together with everything validation needs.
#[derive(Debug, Clone, Copy)]
pub struct ImpactInput<'a> {
    pub prev_hardware: &'a HardwareConfig,
    pub next_hardware: &'a HardwareConfig,
    pub cobot: CobotRating,
    /// Mounted tool weight in kg.
    pub tool_weight: f64,
    pub products: &'a [Product],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Bucket {
    /// Invalidated today, valid on the new hardware.
    Activate,
    /// Valid today, failing on the new hardware.
    Invalidate,
    Unaffected,
}

/// Outcome for one product.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ProductImpact {
    pub product_id: Uuid,
    pub name: String,
    pub bucket: Bucket,
    /// Configuration re-synced to the new hardware, reach flags included.
    pub config: ProductConfig,
    /// Errors against the new hardware. Empty for `Activate`.
    pub errors: ErrorTree,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ImpactReport {
    pub activate: Vec<ProductImpact>,
    pub invalidate: Vec<ProductImpact>,
    pub unaffected: Vec<ProductImpact>,
}

impl ImpactReport {
    /// The change alters some product's state and needs operator consent.
    pub fn requires_confirmation(&self) -> bool {
        !self.activate.is_empty() || !self.invalidate.is_empty()
    }

    pub fn len(&self) -> usize {
        self.activate.len() + self.invalidate.len() + self.unaffected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductImpact> {
        self.activate
            .iter()
            .chain(&self.invalidate)
            .chain(&self.unaffected)
    }

    pub fn get(&self, product_id: Uuid) -> Option<&ProductImpact> {
        self.iter().find(|impact| impact.product_id == product_id)
    }

    fn push(&mut self, impact: ProductImpact) {
        match impact.bucket {
            Bucket::Activate => self.activate.push(impact),
            Bucket::Invalidate => self.invalidate.push(impact),
            Bucket::Unaffected => self.unaffected.push(impact),
        }
    }
}

/// Evaluate every product against the proposed hardware.
///
/// Products are processed in parallel; each bucket keeps input order.
/// Invalid products never make this fail, they land in a bucket.
pub fn analyze_hardware_change(input: &ImpactInput<'_>) -> ImpactReport {
    use rayon::prelude::*;

    let impacts: Vec<ProductImpact> = input
        .products
        .par_iter()
        .map(|product| analyze_product(product, input))
        .collect();

    let mut report = ImpactReport::default();
    for impact in impacts {
        report.push(impact);
    }

    tracing::info!(
        products = report.len(),
        activate = report.activate.len(),
        invalidate = report.invalidate.len(),
        unaffected = report.unaffected.len(),
        "hardware change analyzed"
    );
    report
}

fn analyze_product(product: &Product, input: &ImpactInput<'_>) -> ProductImpact {
    let prev = input.prev_hardware;
    let next = input.next_hardware;

    let mut config = resync_config(&product.config, prev, next);
    for slot in [DrawerSlot::Main, DrawerSlot::Second] {
        config.drawer_mut(slot).reach_tested =
            resolve_reach_tested(slot, &product.config, prev, &config, next);
    }

    let synced = Product {
        config,
        ..product.clone()
    };
    let errors = validate_product(
        &synced,
        &ValidationContext::new(next, input.cobot, input.tool_weight),
    );

    let bucket = if errors.is_empty() {
        if product.state == ProductState::Invalidated {
            Bucket::Activate
        } else {
            Bucket::Unaffected
        }
    } else {
        let before = validate_product(
            product,
            &ValidationContext::new(prev, input.cobot, input.tool_weight),
        );
        if before.is_empty() {
            Bucket::Invalidate
        } else {
            Bucket::Unaffected
        }
    };

    tracing::debug!(
        product = %product.id,
        name = %product.name,
        ?bucket,
        errors = errors.len(),
        "product evaluated"
    );

    ProductImpact {
        product_id: product.id,
        name: synced.name,
        bucket,
        config: synced.config,
        errors,
    }
}

/// Products as they are once the analyzed change is accepted.
///
/// Activated products become `active`; invalidated ones and any product
/// still failing on the new hardware become `invalidated`. `deactivated`
/// survives on products that stay valid. Every product whose
/// configuration or state changed gets its iteration bumped once. Products
/// absent from the report are returned unchanged.
pub fn apply_impact(products: &[Product], report: &ImpactReport) -> Vec<Product> {
    let by_id: HashMap<Uuid, &ProductImpact> =
        report.iter().map(|impact| (impact.product_id, impact)).collect();

    products
        .iter()
        .map(|product| {
            let mut updated = product.clone();
            let Some(impact) = by_id.get(&product.id) else {
                return updated;
            };

            let state = match impact.bucket {
                Bucket::Activate => ProductState::Active,
                Bucket::Invalidate => ProductState::Invalidated,
                Bucket::Unaffected if !impact.errors.is_empty() => ProductState::Invalidated,
                Bucket::Unaffected => product.state,
            };
            let changed = state != product.state || impact.config != product.config;
            if changed {
                updated.state = state;
                updated.commit_config(impact.config.clone());
            }
            updated
        })
        .collect()
}
