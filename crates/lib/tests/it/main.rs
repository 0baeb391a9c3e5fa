/*! Integration tests for Pathwise.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - access: Tests for key resolution, paths and the structural accessor
 * - flatten: Tests for flatten/unflatten and their round trip
 * - normalize: Tests for converting records into plain data
 * - transform: Tests for map_all and delete_empty
 * - value: Tests for the value model and its serde/JSON bridges
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("pathwise=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod access;
mod flatten;
mod helpers;
mod normalize;
mod transform;
mod value;
