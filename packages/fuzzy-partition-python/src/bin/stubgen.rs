//! Generate Python type stubs from pyo3 annotations.
//!
//! Run with: `cargo run --bin stubgen`
//!
//! The stubs are written next to the Python sources under `python/fuzzy_partition/`.

use pyo3_stub_gen::Result;

fn main() -> Result<()> {
    let stub = _fuzzy_partition_rs::stub_info()?;
    stub.generate()?;
    Ok(())
}
