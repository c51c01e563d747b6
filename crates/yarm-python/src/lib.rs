//! # yarm-python
//!
//! Python bindings for yarm-core, built with PyO3.
//!
//! Exposes the following to Python as the `yarm` module:
//!
//! - `to_json(yaml, ignore_x_yarm=True)` -- YAML string -> JSON string
//! - `to_yaml(json)` -- JSON string -> YAML string
//! - `InvalidYamlFormat`, `InvalidJsonFormat` -- `ValueError` subclasses

use pyo3::create_exception;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use yarm_core::{Stage, YarmError};

create_exception!(yarm, InvalidYamlFormat, PyValueError, "Input was not valid YAML.");
create_exception!(yarm, InvalidJsonFormat, PyValueError, "Input was not valid JSON.");

fn to_py_err(err: YarmError) -> PyErr {
    match err.stage() {
        Stage::Yaml => InvalidYamlFormat::new_err(err.to_string()),
        Stage::Json => InvalidJsonFormat::new_err(err.to_string()),
    }
}

/// Convert YAML text to pretty-printed JSON.
///
/// Args:
///     yaml: YAML text, or None.
///     ignore_x_yarm: Strip root keys starting with "x-yarm" (default True).
///
/// Returns:
///     The JSON string, or None for None/blank input.
///
/// Raises:
///     InvalidYamlFormat: If the input is not valid YAML.
///     InvalidJsonFormat: If the document cannot be written as JSON.
#[pyfunction]
#[pyo3(signature = (yaml, ignore_x_yarm=true))]
fn to_json(yaml: Option<&str>, ignore_x_yarm: bool) -> PyResult<Option<String>> {
    yarm_core::to_json(yaml, ignore_x_yarm).map_err(to_py_err)
}

/// Convert JSON text to YAML.
///
/// Args:
///     json: JSON text, or None.
///
/// Returns:
///     The YAML string, or None for None/blank input.
///
/// Raises:
///     InvalidJsonFormat: If the input is not valid JSON.
#[pyfunction]
fn to_yaml(json: Option<&str>) -> PyResult<Option<String>> {
    yarm_core::to_yaml(json).map_err(to_py_err)
}

/// The `yarm` Python module, implemented in Rust via PyO3.
#[pymodule]
fn yarm(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(to_json, m)?)?;
    m.add_function(wrap_pyfunction!(to_yaml, m)?)?;
    m.add("InvalidYamlFormat", m.py().get_type::<InvalidYamlFormat>())?;
    m.add("InvalidJsonFormat", m.py().get_type::<InvalidJsonFormat>())?;
    Ok(())
}
