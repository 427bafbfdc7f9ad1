//! WASM bindings for CalcKit Core.
//!
//! This module provides JavaScript-friendly bindings so calculator form
//! handlers can call the resolver directly in the browser.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmResolver } from 'calckit_core';
//!
//! await init();
//!
//! const resolver = new WasmResolver('ohms-law');
//!
//! // On form submit: empty fields are simply not passed.
//! resolver.resolve_fields(['voltage', 'current'], ['12', '3']);
//!
//! resolver.value('resistance');   // 4
//! resolver.formula('resistance'); // "R = V / I"
//! resolver.is_given('voltage');   // true
//! ```

use wasm_bindgen::prelude::*;

use crate::input;
use crate::networks;
use crate::resolver::{resolve, Derivation, Resolution};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible formula resolver for one calculator network.
///
/// Wraps a builtin [`QuantityNetwork`](crate::network::QuantityNetwork) and
/// keeps the last resolution so the page can query values one by one.
#[wasm_bindgen]
pub struct WasmResolver {
    network: crate::network::QuantityNetwork,
    resolution: Option<Resolution>,
}

#[wasm_bindgen]
impl WasmResolver {
    /// Create a resolver for a builtin network.
    ///
    /// # Arguments
    /// * `network` - Builtin network name: "ohms-law" or "power"
    #[wasm_bindgen(constructor)]
    pub fn new(network: &str) -> Result<WasmResolver, JsValue> {
        let network = networks::by_name(network).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmResolver {
            network,
            resolution: None,
        })
    }

    /// Quantity names of this network, in display order.
    #[wasm_bindgen]
    pub fn quantity_names(&self) -> Vec<String> {
        self.network
            .quantities()
            .iter()
            .map(|q| q.name.to_string())
            .collect()
    }

    /// Resolve from raw form fields.
    ///
    /// `names` and `texts` are parallel arrays; blank texts are skipped, so
    /// the page can pass every field unconditionally. Values accept SI
    /// suffixes ("4.7k", "100n"). On failure the previous resolution is
    /// cleared and the error message is returned for inline display.
    #[wasm_bindgen]
    pub fn resolve_fields(&mut self, names: Vec<String>, texts: Vec<String>) -> Result<(), JsValue> {
        self.resolution = None;

        let fields = names
            .iter()
            .map(String::as_str)
            .zip(texts.iter().map(String::as_str));
        let assignment =
            input::assignment_from_fields(fields).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let resolution = resolve(&self.network, &assignment)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.resolution = Some(resolution);
        Ok(())
    }

    /// Value of a quantity from the last resolution.
    #[wasm_bindgen]
    pub fn value(&self, name: &str) -> Option<f64> {
        self.resolution.as_ref()?.value(name)
    }

    /// Formula used to derive a quantity, if it was computed.
    #[wasm_bindgen]
    pub fn formula(&self, name: &str) -> Option<String> {
        match self.resolution.as_ref()?.derivation(name)? {
            Derivation::Computed { formula } => Some((*formula).to_string()),
            _ => None,
        }
    }

    /// Whether the quantity's value was supplied by the user.
    #[wasm_bindgen]
    pub fn is_given(&self, name: &str) -> bool {
        matches!(
            self.resolution.as_ref().and_then(|r| r.derivation(name)),
            Some(Derivation::Given)
        )
    }

    /// Unit string for a quantity (e.g. "Ω").
    #[wasm_bindgen]
    pub fn unit(&self, name: &str) -> Option<String> {
        self.network
            .find(name)
            .map(|id| self.network.quantity(id).unit.to_string())
    }

    /// Quantities that were supplied but ignored under the network's
    /// lenient over-determined policy. Empty for the builtin networks.
    #[wasm_bindgen]
    pub fn ignored(&self) -> Vec<String> {
        self.resolution
            .as_ref()
            .map(|r| r.ignored().to_vec())
            .unwrap_or_default()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Get the builtin network names.
#[wasm_bindgen]
pub fn network_names() -> Vec<String> {
    networks::NETWORK_NAMES.iter().map(|n| n.to_string()).collect()
}
