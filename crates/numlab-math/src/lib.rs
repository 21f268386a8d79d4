//! # Numlab Math
//!
//! Numerical methods for linear and nonlinear equations, quadrature,
//! interpolation and ordinary differential equations.
//!
//! This crate provides:
//!
//! - **Linear Algebra**: Jacobi iteration with automatic row reordering into
//!   strict diagonal dominance
//! - **Solvers**: Root finding for one equation (bisection, chord, Newton,
//!   secant, relaxed simple iteration)
//! - **Systems**: Newton and simple iteration for 2×2 nonlinear systems
//! - **Integration**: Newton–Cotes, midpoint, trapezoidal and Simpson rules
//! - **Interpolation**: Lagrange, Newton and central-difference formulas
//! - **ODE**: Euler, improved Euler, Runge–Kutta 4 and Adams, with Runge
//!   error estimates
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: every solve takes its inputs by reference and
//!   returns a fresh result; nothing is shared between calls
//! - **Typed failures**: iteration caps, bad brackets and singular steps
//!   are [`MathError`] variants, never panics
//! - **Quiet by default**: progress goes through the `log` facade at
//!   `debug`/`trace` level; no logger is installed
//!
//! ## Example
//!
//! ```rust
//! use numlab_math::prelude::*;
//!
//! let solution = solve_system(&[[1.0, 3.0], [4.0, 1.0]], &[4.0, 5.0], 1e-10).unwrap();
//!
//! assert_eq!(solution.permutation, vec![1, 0]);
//! assert!((solution.solution[0] - 1.0).abs() < 1e-9);
//! assert!((solution.solution[1] - 1.0).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::if_not_else)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::single_match_else)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::derivable_impls)]

pub mod error;
pub mod integration;
pub mod interpolation;
pub mod linear_algebra;
pub mod ode;
pub mod solvers;
pub mod systems;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::integration::{
        midpoint, newton_cotes, relative_error, simpson, trapezoidal, QuadratureRule,
    };
    pub use crate::interpolation::{
        Bessel, DifferenceTable, GaussForward, Interpolator, Lagrange, NewtonBackward,
        NewtonDivided, NewtonForward, Stirling,
    };
    pub use crate::linear_algebra::{
        enforce_diagonal_dominance, solve_system, DominantSystem, JacobiConfig, JacobiSolution,
        JacobiSolver, LinearSystem,
    };
    pub use crate::ode::{
        max_error, recommended_step, runge_estimate, InitialValueProblem, OdeMethod, OdeSolution,
    };
    pub use crate::solvers::{
        bisection, chord, has_sign_change, newton, newton_numerical, relaxation_parameter, secant,
        simple_iteration, BisectionSolver, ChordSolver, FixedPointResult, NewtonSolver,
        SecantSolver, Solver, SolverConfig, SolverResult,
    };
    pub use crate::systems::{
        newton_system, newton_system_numerical, simple_iteration_system, SystemResult,
    };
}

pub use error::{MathError, MathResult};
