#![doc = r#"
QRGEN — a command-line QR code generator for URLs.

This crate provides a typed, ergonomic API for turning a URL into PNG and/or
SVG QR code images. It powers the QRGEN CLI and can be embedded in your own
Rust applications. QR-matrix construction and error correction are delegated
to the `qrcode` crate; PNG byte encoding to the `image` crate.

Add dependency
--------------
```toml
[dependencies]
qrgen = "0.1"
```

Quick start: encode a URL to a file
-----------------------------------
```rust,no_run
use std::path::Path;
use qrgen::{generate_to_path, OutputFormat, QrParams};

fn main() -> qrgen::Result<()> {
    let params = QrParams::default();
    let written = generate_to_path(
        "https://example.com",
        Path::new("/out/qr.png"),
        OutputFormat::Png,
        &params,
    )?;
    println!("wrote {:?}", written);
    Ok(())
}
```

Encode in-memory to `QrMatrix`
------------------------------
```rust
use qrgen::{encode, EcLevelArg};

fn main() -> qrgen::Result<()> {
    let matrix = encode("https://example.com", EcLevelArg::H)?;
    assert!(matrix.size() >= 21);
    Ok(())
}
```

Write the default PNG/SVG pair
------------------------------
```rust,no_run
use std::path::Path;
use qrgen::{generate_pair, EcLevelArg};

fn main() -> qrgen::Result<()> {
    let (png, svg) = generate_pair(
        "https://example.com",
        Path::new("/out"),
        EcLevelArg::H,
        10, // PNG pixels per module
        5,  // SVG pixels per module
        4,  // quiet zone in modules
    )?;
    println!("{} / {}", png.display(), svg.display());
    Ok(())
}
```

Error handling
--------------
All public functions return `qrgen::Result<T>`; match on `qrgen::Error` to
handle specific cases, e.g. validation or encoder errors.

```rust
use qrgen::{validate, Error};

fn main() {
    match validate("ftp://x.com") {
        Ok(()) => {}
        Err(Error::InvalidUrl { url }) => eprintln!("rejected: {url}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — enums and core types (e.g. `EcLevelArg`, `OutputFormat`, `QrMatrix`).
- [`io`] — PNG/SVG writers.
- [`core`] — URL normalization/validation and parameter types.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::QrParams;
pub use error::{Error, Result};
pub use types::{EcLevelArg, OutputFormat, QrMatrix};

// URL helpers
pub use core::url::{DEFAULT_URL, is_valid, normalize, validate};

// High-level API re-exports
pub use api::{encode, generate_pair, generate_to_path};
