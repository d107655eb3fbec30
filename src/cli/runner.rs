use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use grayfilter::{
    FilterKind, FilterStep, PipelineParams, load_params, process_directory_to_path,
    process_file_to_path,
};

use super::args::CliArgs;
use super::errors::AppError;

fn missing(arg: &str) -> AppError {
    AppError::MissingArgument {
        arg: arg.to_string(),
    }
}

fn step_for(kind: FilterKind, args: &CliArgs) -> Result<FilterStep, AppError> {
    Ok(match kind {
        FilterKind::Blur => FilterStep::Blur {
            kernel_size: args.kernel_size,
        },
        FilterKind::Contour => FilterStep::Contour,
        FilterKind::Rotate => FilterStep::Rotate,
        FilterKind::SaltNPepper => FilterStep::SaltNPepper {
            amount: args.amount,
        },
        FilterKind::Concat => FilterStep::Concat {
            other: args.other.clone().ok_or_else(|| missing("--other"))?,
            direction: args.direction,
        },
        FilterKind::Segment => FilterStep::Segment {
            num_segments: args.segments,
        },
    })
}

pub(crate) fn build_params(args: &CliArgs) -> Result<PipelineParams, AppError> {
    if let Some(path) = &args.pipeline {
        if !args.filters.is_empty() {
            warn!("--pipeline given; ignoring {} --filter flag(s)", args.filters.len());
        }
        let mut params = load_params(path)?;
        if args.seed.is_some() {
            params.seed = args.seed;
        }
        info!("Loaded pipeline with {} step(s) from {:?}", params.steps.len(), path);
        return Ok(params);
    }

    if args.filters.is_empty() {
        return Err(missing("--filter or --pipeline"));
    }

    let steps = args
        .filters
        .iter()
        .map(|&kind| step_for(kind, args))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PipelineParams {
        steps,
        scaling: args.scaling,
        suffix: args.suffix.clone(),
        seed: args.seed,
    })
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
    }

    let params = build_params(&args)?;
    let batch_mode = args.batch || args.input_dir.is_some();

    if batch_mode {
        let input_dir = args.input_dir.ok_or_else(|| missing("--input-dir"))?;
        let report = process_directory_to_path(&input_dir, &params, args.batch)?;

        println!(
            "processed={} skipped={} errors={}",
            report.processed, report.skipped, report.errors
        );
    } else {
        let input = args.input.ok_or_else(|| missing("--input"))?;
        let written = process_file_to_path(&input, &params)?;
        for path in written.paths() {
            println!("{}", path.display());
        }
        info!("Successfully processed: {:?}", input);
    }

    Ok(())
}
