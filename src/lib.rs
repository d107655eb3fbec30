#![doc = r#"
grayfilter — an in-memory grayscale image filter pipeline.

This crate decodes a raster image into a grayscale matrix, applies a chain of
pixel-array filters (box blur, contour, quarter-turn rotation, salt-and-pepper
noise, concatenation, row-band segmentation) and writes the result next to the
source as `{stem}_filtered{ext}`. It powers the `grayfilter` CLI and can be
embedded in your own Rust applications.

Add dependency
--------------
```toml
[dependencies]
grayfilter = "0.1"
```

Quick start: chain filters on one image
---------------------------------------
```rust,no_run
use grayfilter::{ConcatDirection, ImageMatrix};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> grayfilter::Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    let left = ImageMatrix::decode("photos/left.png")?;
    let right = ImageMatrix::decode("photos/right.png")?;

    let out = left
        .concat(&right, ConcatDirection::Horizontal)?
        .blur(4)?
        .salt_and_pepper(0.05, &mut rng)?;

    let written = out.persist()?; // photos/left_filtered.png
    println!("{}", written.display());
    Ok(())
}
```

Pipelines from config
---------------------
```rust,no_run
use std::path::Path;
use grayfilter::{process_file_to_path, FilterStep, PipelineParams, Scaling};

fn main() -> grayfilter::Result<()> {
    let params = PipelineParams {
        steps: vec![
            FilterStep::Blur { kernel_size: 16 },
            FilterStep::Contour,
            FilterStep::Segment { num_segments: 4 },
        ],
        scaling: Scaling::MinMax,
        seed: Some(7),
        ..PipelineParams::default()
    };

    let written = process_file_to_path(Path::new("photos/cat.jpg"), &params)?;
    for p in written.paths() {
        println!("{}", p.display());
    }
    Ok(())
}
```

The same parameters load from JSON with [`load_params`]:

```json
{ "steps": [{ "op": "blur", "kernel_size": 8 }, { "op": "rotate" }], "seed": 1 }
```

Error handling
--------------
All public functions return `grayfilter::Result<T>`; match on `grayfilter::Error`
to tell decode, shape and persistence failures apart.

```rust,no_run
use grayfilter::{Error, ImageMatrix};

fn main() {
    match ImageMatrix::decode("tiny.png").and_then(|m| m.blur(16)) {
        Ok(m) => println!("{:?}", m.dim()),
        Err(Error::Decode { path, reason }) => eprintln!("cannot read {}: {reason}", path.display()),
        Err(Error::Dimension { op, reason }) => eprintln!("{op}: {reason}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — `ImageMatrix`, filter kernels, pipeline and parameters.
- [`types`] — shared enums (`ConcatDirection`, `Scaling`, `FilterKind`).
- [`io`] — decode and encode collaborators.
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
pub use crate::core::matrix::{ImageMatrix, PersistOptions, Segments};
pub use crate::core::params::{FilterStep, PipelineParams};
pub use crate::core::processing::pipeline::{PipelineOutput, apply_steps};
pub use error::{Error, Result};
pub use types::{ConcatDirection, FilterKind, Scaling};

// High-level API re-exports
pub use api::{
    BatchReport, PersistedOutput, load_params, make_rng, process_directory_to_path,
    process_file_to_output, process_file_to_path,
};
