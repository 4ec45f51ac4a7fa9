/*! Integration tests for Pathwise.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - qualifier: Tests for path parsing, escaping and the eager/lazy forms
 * - source: Tests for segment-level access to maps, lists and custom sources
 * - navigator: Tests for traversal, auto-vivification and root management
 * - value: Tests for typed getters, defaults and numeric coercion
 * - node: Tests for the data model and its JSON bridge
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

mod helpers;
mod navigator;
mod source;
