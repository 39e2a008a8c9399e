//! Quantis: dimensional analysis for physical quantities
//!
//! Three layers share one unit identity, [`UnitDef`] (dimension exponents
//! plus a scale factor relative to SI base units):
//!
//! - a closed `const fn` algebra over unit definitions;
//! - type-level units, where [`Quantity<N, U>`](units::Quantity) rejects
//!   mismatched addition and incompatible conversion at compile time;
//! - a formula evaluator that builds units from text such as `"kg / m^3"`.
//!
//! # Architecture
//!
//! ```text
//! formula → lexer → parser → Expr → fold over SymbolTable → UnitDef
//!                                                             ↓
//!                                  QuantityKind<N> → DynQuantity<N>
//! ```
//!
//! # Example
//!
//! ```
//! use quantis::prelude::*;
//!
//! let force: Quantity<f64, PoundForce> = Quantity::new(1.0);
//! let newtons = force.convert_to::<Newton>();
//! assert!((newtons.value() - 4.448_221_615).abs() < 1e-9);
//!
//! let density = eval_unit("g / cm^3", &[]).unwrap();
//! assert_eq!(density.dimension, Dimension::DENSITY);
//! ```

pub mod common;
pub mod config;
pub mod eval;
pub mod units;

pub use common::Span;
pub use config::{ConfigError, UnitsConfig};
pub use eval::{EvalError, Evaluator, SymbolTable, eval_quantity, eval_unit};
pub use units::{
    ConversionError, Dimension, DynQuantity, Prefix, Quantity, QuantityKind, Unit, UnitDef,
};

/// Prelude for common imports
pub mod prelude {
    pub use crate::eval::{EvalError, Evaluator, SymbolTable, eval_quantity, eval_unit};
    pub use crate::units::prelude::*;
    pub use crate::units::{
        ConversionError, DynQuantity, Prefix, QuantityKind, UnitDef, conversion_factor,
    };
}
