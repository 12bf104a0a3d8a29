//! Probability Playground CLI
//!
//! The entry point for pp-core, handling:
//! - Monte Carlo experiments (coin, birthday, consensus, Monty Hall)
//! - Closed-form references (binomial, autoscaling)
//! - Bayesian bag-of-words classification
//! - Configuration checks and JSON Schema output
//!
//! Payloads are JSON on stdout; logs go to stderr.

use clap::{Args, Parser, Subcommand};
use pp_core::bayes::{BayesTextClassifier, ClassifierError, PosteriorMode};
use pp_core::config::{
    load_config, ConfigError, ConfigOptions, ResolvedConfig, CONFIG_SCHEMA_VERSION,
};
use pp_core::exit_codes::ExitCode;
use pp_core::experiments::autoscaling::{self, cpu_scale, Range, Recommendation, ScalingContext};
use pp_core::experiments::{
    self, Birthday, BirthdayExperiment, CoinExperiment, ConsensusExperiment, Experiment,
    MontyHallExperiment,
};
use pp_core::log_event;
use pp_core::logging::{
    event_names, generate_run_id, get_host_id, init_logging, LogConfig, LogContext, LogFormat,
    LogLevel, Stage,
};
use pp_core::monte_carlo::{sweep, CancelToken, Distribution, EstimateError, MonteCarloEstimator};
use pp_core::reference::{self, ReferenceError};
use pp_core::schema::{
    available_schemas, format_schema, generate_all_schemas, generate_schema, SchemaFormat,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// Probability Playground - Monte Carlo estimates and Bayesian text classification
#[derive(Parser)]
#[command(name = "pp-core")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Override config directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Explicit experiments.json file
    #[arg(long, global = true)]
    experiments: Option<PathBuf>,

    /// Seed for the random stream (overrides the configured seed)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log format on stderr (human, jsonl)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate a (possibly biased) coin toss
    Coin(CoinArgs),

    /// Estimate the chance of a shared birthday
    Birthday(BirthdayArgs),

    /// Estimate consensus degrees among random voters
    Consensus(ConsensusArgs),

    /// Estimate stay vs switch in the Monty Hall game
    MontyHall(MontyHallArgs),

    /// Exact binomial probability of k successes in n trials
    Binomial(BinomialArgs),

    /// CPU-based autoscaling recommendation
    Autoscale(AutoscaleArgs),

    /// Train a bag-of-words classifier and classify a text
    Classify(ClassifyArgs),

    /// Validate resolved configuration and print it
    Check,

    /// Print JSON Schema for output and configuration types
    Schema(SchemaArgs),

    /// Print version information
    Version,
}

// ============================================================================
// Command argument structs
// ============================================================================

#[derive(Args, Debug)]
struct SimOpts {
    /// Split trials across this many independently seeded streams
    #[arg(long)]
    partitions: Option<u64>,
}

#[derive(Args, Debug)]
struct CoinArgs {
    /// Number of tosses
    #[arg(long)]
    trials: Option<u64>,

    /// Probability of heads
    #[arg(long)]
    p: Option<f64>,

    #[command(flatten)]
    sim: SimOpts,
}

#[derive(Args, Debug)]
struct BirthdayArgs {
    /// Days in the calendar
    #[arg(long)]
    days: Option<u64>,

    /// People in the group
    #[arg(long)]
    group: Option<u64>,

    /// Simulated groups
    #[arg(long)]
    samples: Option<u64>,

    /// Report every group size from 1 to MAX instead of a single estimate
    #[arg(long, value_name = "MAX")]
    sweep: Option<u64>,

    #[command(flatten)]
    sim: SimOpts,
}

#[derive(Args, Debug)]
struct ConsensusArgs {
    /// Number of simulated tasks
    #[arg(long)]
    tasks: Option<u64>,

    /// Voters per task
    #[arg(long)]
    voters: Option<u32>,

    /// Answers each voter chooses from
    #[arg(long)]
    options: Option<u32>,

    /// Report every voter count from 1 to MAX instead of a single estimate
    #[arg(long, value_name = "MAX")]
    sweep: Option<u32>,

    #[command(flatten)]
    sim: SimOpts,
}

#[derive(Args, Debug)]
struct MontyHallArgs {
    /// Number of games
    #[arg(long)]
    games: Option<u64>,

    /// Doors per game (at least 3)
    #[arg(long)]
    doors: Option<u32>,

    #[command(flatten)]
    sim: SimOpts,
}

#[derive(Args, Debug)]
struct BinomialArgs {
    /// Trials
    #[arg(long)]
    n: u64,

    /// Successes
    #[arg(long)]
    k: u64,

    /// Probability of success per trial
    #[arg(long)]
    p: f64,
}

#[derive(Args, Debug)]
struct AutoscaleArgs {
    /// Current fleet size
    #[arg(long)]
    instances: u32,

    /// Average CPU utilisation in percent; several values are replayed in order
    #[arg(long, num_args = 1.., required = true)]
    utilisation: Vec<f64>,

    /// Target utilisation after scaling
    #[arg(long)]
    maintain: Option<f64>,

    /// Lower bound of the no-op band
    #[arg(long)]
    noop_min: Option<f64>,

    /// Upper bound of the no-op band
    #[arg(long)]
    noop_max: Option<f64>,
}

#[derive(Args, Debug)]
struct ClassifyArgs {
    /// Training sample, repeatable
    #[arg(long = "train", value_name = "LABEL=TEXT", required = true)]
    train: Vec<String>,

    /// Text to classify
    #[arg(long)]
    text: String,

    /// Prior probability of a class, repeatable (defaults to the configured prior)
    #[arg(long = "prior", value_name = "LABEL=P")]
    prior: Vec<String>,

    /// Posterior update mode (joint, independent)
    #[arg(long)]
    mode: Option<PosteriorMode>,

    /// Include the posterior after every informative token
    #[arg(long)]
    trace: bool,
}

#[derive(Args, Debug)]
struct SchemaArgs {
    /// Type name to print
    name: Option<String>,

    /// List available types
    #[arg(long)]
    list: bool,

    /// Print every schema as one object
    #[arg(long)]
    all: bool,

    /// Single-line JSON
    #[arg(long)]
    compact: bool,
}

/// Any failure a command can report.
#[derive(Debug, Error)]
enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Estimate(#[from] EstimateError),

    #[error(transparent)]
    Reference(#[from] ReferenceError),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),

    #[error("invalid argument: {0}")]
    Args(String),
}

impl CommandError {
    fn exit_code(&self) -> ExitCode {
        match self {
            CommandError::Config(e) => e.into(),
            CommandError::Estimate(e) => e.into(),
            CommandError::Reference(e) => e.into(),
            CommandError::Classifier(e) => e.into(),
            CommandError::Args(_) => ExitCode::ArgsError,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let cli_level = LogLevel::from_flags(cli.global.verbose, cli.global.quiet);
    init_logging(&LogConfig::from_env(cli_level, cli.global.log_format));

    let ctx = LogContext::new(generate_run_id(), get_host_id());
    log_event!(
        ctx,
        DEBUG,
        event_names::RUN_STARTED,
        Stage::Init,
        "run started",
        version = env!("CARGO_PKG_VERSION")
    );
    let global = &cli.global;
    let cancel = CancelToken::new();
    install_interrupt_handler(&ctx, &cancel);

    let (command, outcome) = match &cli.command {
        Commands::Coin(args) => ("coin", run_coin(global, &ctx, &cancel, args)),
        Commands::Birthday(args) => ("birthday", run_birthday(global, &ctx, &cancel, args)),
        Commands::Consensus(args) => ("consensus", run_consensus(global, &ctx, &cancel, args)),
        Commands::MontyHall(args) => ("monty-hall", run_monty_hall(global, &ctx, &cancel, args)),
        Commands::Binomial(args) => ("binomial", run_binomial(args)),
        Commands::Autoscale(args) => ("autoscale", run_autoscale(global, &ctx, args)),
        Commands::Classify(args) => ("classify", run_classify(global, &ctx, args)),
        Commands::Check => ("check", run_check(global, &ctx)),
        Commands::Schema(args) => std::process::exit(run_schema(args).as_i32()),
        Commands::Version => {
            print_version();
            std::process::exit(ExitCode::Clean.as_i32());
        }
    };

    log_event!(
        ctx,
        DEBUG,
        event_names::RUN_FINISHED,
        Stage::Report,
        "command finished",
        command = command
    );

    let exit_code = match outcome {
        Ok(result) => emit(&ctx, command, result),
        Err(err) => output_error(&ctx, command, &err),
    };
    std::process::exit(exit_code.as_i32());
}

// ============================================================================
// Shared helpers
// ============================================================================

fn load(global: &GlobalOpts, ctx: &LogContext) -> Result<ResolvedConfig, ConfigError> {
    let options = ConfigOptions {
        config_dir: global.config.clone(),
        experiments_path: global.experiments.clone(),
    };
    let config = load_config(&options)?;
    match &config.path {
        Some(path) => {
            let shown = path.display().to_string();
            let source = config.source.to_string();
            log_event!(
                ctx,
                DEBUG,
                event_names::CONFIG_LOADED,
                Stage::Init,
                "configuration loaded",
                path = shown.as_str(),
                source = source.as_str()
            );
        }
        None => {
            log_event!(
                ctx,
                DEBUG,
                event_names::CONFIG_DEFAULT_USED,
                Stage::Init,
                "using built-in configuration"
            );
        }
    }
    Ok(config)
}

/// Ctrl-C stops a running estimation between trials; the command then exits
/// with `ERR_CANCELLED`.
fn install_interrupt_handler(ctx: &LogContext, cancel: &CancelToken) {
    let token = cancel.clone();
    if let Err(e) = ctrlc::set_handler(move || token.cancel()) {
        let message = e.to_string();
        log_event!(
            ctx,
            WARN,
            event_names::SIGNAL_HANDLER_FAILED,
            Stage::Init,
            "could not install Ctrl-C handler",
            error = message.as_str()
        );
    }
}

fn seed_for(global: &GlobalOpts, config: &ResolvedConfig) -> u64 {
    global.seed.unwrap_or(config.experiments.seed)
}

fn simulate<E: Experiment>(
    ctx: &LogContext,
    cancel: &CancelToken,
    experiment: &E,
    trials: u64,
    seed: u64,
    partitions: Option<u64>,
) -> Result<Distribution<E::Bucket>, EstimateError> {
    let ctx = ctx.clone().with_experiment(experiment.name());
    log_event!(
        ctx,
        DEBUG,
        event_names::SIMULATE_STARTED,
        Stage::Simulate,
        "simulation started",
        trials = trials,
        seed = seed
    );

    let estimator = MonteCarloEstimator::new().with_cancel(cancel.clone());
    let dist = match partitions {
        Some(parts) => estimator.run_partitioned(trials, parts, seed, |rng| experiment.trial(rng)),
        None => {
            let mut rng = StdRng::seed_from_u64(seed);
            experiments::run(&estimator, experiment, trials, &mut rng)
        }
    };

    match &dist {
        Ok(d) => {
            log_event!(
                ctx,
                INFO,
                event_names::SIMULATE_FINISHED,
                Stage::Simulate,
                "simulation finished",
                trials = d.total(),
                buckets = d.counts().len() as u64
            );
        }
        Err(EstimateError::Cancelled { completed }) => {
            log_event!(
                ctx,
                WARN,
                event_names::SIMULATE_CANCELLED,
                Stage::Simulate,
                "simulation cancelled",
                completed = *completed
            );
        }
        Err(_) => {}
    }
    dist
}

/// Estimated distribution with the exact reference alongside, when one exists.
fn distribution_payload<E: Experiment>(
    experiment: &E,
    dist: &Distribution<E::Bucket>,
    seed: u64,
) -> Value {
    let reference = experiment.reference();
    let deviation = reference
        .as_ref()
        .map(|r| dist.max_abs_deviation(r.iter().map(|(b, p)| (b, *p))));
    let reference: Option<Vec<Value>> = reference.map(|r| {
        r.into_iter()
            .map(|(bucket, p)| json!({ "bucket": bucket.to_string(), "probability": p }))
            .collect()
    });

    json!({
        "experiment": experiment.name(),
        "seed": seed,
        "distribution": dist.to_report(),
        "reference": reference,
        "max_abs_deviation": deviation,
    })
}

fn parse_pair<'a>(raw: &'a str, flag: &str) -> Result<(&'a str, &'a str), CommandError> {
    raw.split_once('=')
        .map(|(label, value)| (label.trim(), value))
        .filter(|(label, _)| !label.is_empty())
        .ok_or_else(|| CommandError::Args(format!("{flag} expects LABEL=VALUE, got {raw:?}")))
}

fn emit(ctx: &LogContext, command: &str, result: Value) -> ExitCode {
    let response = json!({
        "schema_version": CONFIG_SCHEMA_VERSION,
        "run_id": ctx.run_id,
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "command": command,
        "status": "ok",
        "result": result,
    });

    match serde_json::to_string_pretty(&response) {
        Ok(out) => {
            println!("{}", out);
            ExitCode::Clean
        }
        Err(e) => {
            let message = e.to_string();
            log_event!(
                ctx,
                ERROR,
                event_names::INTERNAL_ERROR,
                Stage::Report,
                "failed to serialize output",
                error = message.as_str()
            );
            ExitCode::InternalError
        }
    }
}

fn output_error(ctx: &LogContext, command: &str, error: &CommandError) -> ExitCode {
    let exit_code = error.exit_code();
    if let CommandError::Config(e) = error {
        let message = e.to_string();
        log_event!(
            ctx,
            ERROR,
            event_names::CONFIG_ERROR,
            Stage::Init,
            "configuration error",
            error = message.as_str()
        );
    }

    let response = json!({
        "schema_version": CONFIG_SCHEMA_VERSION,
        "run_id": ctx.run_id,
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "command": command,
        "status": "error",
        "error": {
            "code": exit_code.code_name(),
            "exit_code": exit_code.as_i32(),
            "message": error.to_string(),
        }
    });

    match serde_json::to_string_pretty(&response) {
        Ok(out) => eprintln!("{}", out),
        Err(_) => eprintln!("{}: {}", command, error),
    }
    exit_code
}

// ============================================================================
// Command implementations
// ============================================================================

fn run_coin(
    global: &GlobalOpts,
    ctx: &LogContext,
    cancel: &CancelToken,
    args: &CoinArgs,
) -> Result<Value, CommandError> {
    let config = load(global, ctx)?;
    let section = &config.experiments.coin;
    let seed = seed_for(global, &config);

    let experiment = CoinExperiment::new(args.p.unwrap_or(section.p))?;
    let trials = args.trials.unwrap_or(section.trials);
    let dist = simulate(ctx, cancel, &experiment, trials, seed, args.sim.partitions)?;
    Ok(distribution_payload(&experiment, &dist, seed))
}

fn run_birthday(
    global: &GlobalOpts,
    ctx: &LogContext,
    cancel: &CancelToken,
    args: &BirthdayArgs,
) -> Result<Value, CommandError> {
    let config = load(global, ctx)?;
    let section = &config.experiments.birthday;
    let seed = seed_for(global, &config);

    let days = args.days.unwrap_or(section.days);
    let samples = args.samples.unwrap_or(section.samples);
    let experiment = BirthdayExperiment::new(days, args.group.unwrap_or(section.group_size))?;

    if let Some(max_group) = args.sweep {
        let points = sweep(1..=max_group, |&group| {
            let e = experiment.with_group_size(group);
            let dist = simulate(ctx, cancel, &e, samples, seed, args.sim.partitions)?;
            Ok::<_, EstimateError>(dist.probability(&Birthday::Shared))
        })?;
        let rows: Vec<Value> = points
            .iter()
            .map(|point| {
                json!({
                    "group_size": point.parameter,
                    "estimate": point.probability,
                    "exact": experiment.with_group_size(point.parameter).collision_probability(),
                })
            })
            .collect();
        return Ok(json!({
            "experiment": experiment.name(),
            "seed": seed,
            "days": days,
            "samples": samples,
            "sweep": rows,
        }));
    }

    let dist = simulate(ctx, cancel, &experiment, samples, seed, args.sim.partitions)?;
    let mut payload = distribution_payload(&experiment, &dist, seed);
    payload["collision_probability"] = json!({
        "iterative": reference::birthday_iterative(days, experiment.group_size())?,
        "lgamma": reference::birthday_lgamma(days, experiment.group_size())?,
    });
    Ok(payload)
}

fn run_consensus(
    global: &GlobalOpts,
    ctx: &LogContext,
    cancel: &CancelToken,
    args: &ConsensusArgs,
) -> Result<Value, CommandError> {
    let config = load(global, ctx)?;
    let section = &config.experiments.consensus;
    let seed = seed_for(global, &config);

    let tasks = args.tasks.unwrap_or(section.tasks);
    let options = args.options.unwrap_or(section.options);

    if let Some(max_voters) = args.sweep {
        let mut rows = Vec::new();
        for voters in 1..=max_voters {
            let experiment = ConsensusExperiment::new(voters, options)?;
            let dist = simulate(ctx, cancel, &experiment, tasks, seed, args.sim.partitions)?;
            rows.push(json!({
                "voters": voters,
                "distribution": dist.to_report(),
                "exact": experiment.exact_distribution(),
            }));
        }
        return Ok(json!({
            "experiment": "consensus",
            "seed": seed,
            "tasks": tasks,
            "options": options,
            "sweep": rows,
        }));
    }

    let experiment = ConsensusExperiment::new(args.voters.unwrap_or(section.voters), options)?;
    let dist = simulate(ctx, cancel, &experiment, tasks, seed, args.sim.partitions)?;
    Ok(distribution_payload(&experiment, &dist, seed))
}

fn run_monty_hall(
    global: &GlobalOpts,
    ctx: &LogContext,
    cancel: &CancelToken,
    args: &MontyHallArgs,
) -> Result<Value, CommandError> {
    let config = load(global, ctx)?;
    let seed = seed_for(global, &config);

    let experiment = match args.doors {
        Some(doors) => MontyHallExperiment::with_doors(doors)?,
        None => MontyHallExperiment::default(),
    };
    let games = args.games.unwrap_or(config.experiments.monty_hall.games);
    let dist = simulate(ctx, cancel, &experiment, games, seed, args.sim.partitions)?;
    let mut payload = distribution_payload(&experiment, &dist, seed);
    payload["doors"] = json!(experiment.doors());
    Ok(payload)
}

fn run_binomial(args: &BinomialArgs) -> Result<Value, CommandError> {
    let pmf = reference::binomial_pmf(args.n, args.k, args.p)?;
    Ok(json!({
        "n": args.n,
        "k": args.k,
        "p": args.p,
        "pmf": pmf,
        "log_pmf": pp_math::binomial::binomial_log_pmf(args.n, args.k, args.p),
    }))
}

fn run_autoscale(
    global: &GlobalOpts,
    ctx: &LogContext,
    args: &AutoscaleArgs,
) -> Result<Value, CommandError> {
    let config = load(global, ctx)?;
    let section = &config.experiments.autoscaling;

    let noop_range = Range::new(
        args.noop_min.unwrap_or(section.noop_min),
        args.noop_max.unwrap_or(section.noop_max),
    )?;
    let first = args
        .utilisation
        .first()
        .copied()
        .ok_or_else(|| CommandError::Args("at least one --utilisation is required".to_string()))?;
    let scaling = ScalingContext {
        noop_range,
        maintain: args.maintain.unwrap_or(section.maintain),
        utilisation: first,
        instances: args.instances,
    };

    if args.utilisation.len() > 1 {
        let steps = autoscaling::replay(scaling, &args.utilisation)?;
        return Ok(json!({ "context": scaling, "steps": steps }));
    }

    let change = cpu_scale(&scaling)?;
    Ok(json!({
        "context": scaling,
        "change": change,
        "recommendation": Recommendation::from_delta(change),
    }))
}

fn run_classify(
    global: &GlobalOpts,
    ctx: &LogContext,
    args: &ClassifyArgs,
) -> Result<Value, CommandError> {
    let config = load(global, ctx)?;
    let section = &config.experiments.classifier;
    let ctx = ctx.clone().with_experiment("classify");

    let mut classifier: BayesTextClassifier<String> = BayesTextClassifier::new();
    for raw in &args.train {
        let (label, text) = parse_pair(raw, "--train")?;
        classifier.observe_text(label.to_string(), text);
    }
    log_event!(
        ctx,
        DEBUG,
        event_names::TRAIN_FINISHED,
        Stage::Train,
        "training finished",
        samples = args.train.len() as u64,
        classes = classifier.classes().count() as u64
    );

    let prior: BTreeMap<String, f64> = if args.prior.is_empty() {
        section.prior.clone()
    } else {
        args.prior
            .iter()
            .map(|raw| {
                let (label, value) = parse_pair(raw, "--prior")?;
                let p = value.trim().parse::<f64>().map_err(|e| {
                    CommandError::Args(format!("--prior {label}: {e}"))
                })?;
                Ok((label.to_string(), p))
            })
            .collect::<Result<_, CommandError>>()?
    };
    let mode = args.mode.unwrap_or_else(|| section.mode.into());

    log_event!(
        ctx,
        DEBUG,
        event_names::CLASSIFY_STARTED,
        Stage::Classify,
        "classification started",
        mode = mode.to_string().as_str(),
        classes = prior.len() as u64
    );

    let tokens = args.text.split_whitespace();
    let (posterior, steps) = if args.trace {
        let traced = classifier.classify_traced(tokens, &prior, mode)?;
        (traced.posterior, Some(traced.steps))
    } else {
        (classifier.classify_with_mode(tokens, &prior, mode)?, None)
    };

    for token in &posterior.skipped {
        log_event!(
            ctx,
            DEBUG,
            event_names::CLASSIFY_TOKEN_SKIPPED,
            Stage::Classify,
            "token skipped",
            token = token.as_str()
        );
    }
    let most_likely = posterior
        .most_likely()
        .map(|(label, p)| json!({ "label": label, "probability": p }));
    log_event!(
        ctx,
        INFO,
        event_names::CLASSIFY_FINISHED,
        Stage::Classify,
        "classification finished",
        tokens_used = posterior.tokens_used as u64,
        skipped = posterior.skipped.len() as u64
    );

    Ok(json!({
        "posterior": posterior,
        "most_likely": most_likely,
        "trace": steps,
    }))
}

fn run_check(global: &GlobalOpts, ctx: &LogContext) -> Result<Value, CommandError> {
    let config = load(global, ctx)?;
    Ok(json!({
        "config": config.snapshot(),
        "experiments": config.experiments,
    }))
}

fn run_schema(args: &SchemaArgs) -> ExitCode {
    if args.list {
        for (name, description) in available_schemas() {
            println!("{:<20} {}", name, description);
        }
        return ExitCode::Clean;
    }

    let value = if args.all {
        Value::Object(generate_all_schemas().into_iter().collect())
    } else if let Some(name) = &args.name {
        match generate_schema(name) {
            Some(schema) => schema,
            None => {
                eprintln!("Unknown schema type: {}", name);
                eprintln!("Use --list to see available types");
                return ExitCode::ArgsError;
            }
        }
    } else {
        eprintln!("Specify a type name, --list or --all");
        return ExitCode::ArgsError;
    };

    let format = if args.compact {
        SchemaFormat::JsonCompact
    } else {
        SchemaFormat::Json
    };
    match format_schema(&value, format) {
        Ok(out) => {
            println!("{}", out);
            ExitCode::Clean
        }
        Err(e) => {
            eprintln!("failed to format schema: {}", e);
            ExitCode::InternalError
        }
    }
}

fn print_version() {
    let version_info = json!({
        "schema_version": CONFIG_SCHEMA_VERSION,
        "pp_core_version": env!("CARGO_PKG_VERSION"),
        "rust_version": env!("CARGO_PKG_RUST_VERSION"),
    });
    match serde_json::to_string_pretty(&version_info) {
        Ok(out) => println!("{}", out),
        Err(_) => println!("pp-core {}", env!("CARGO_PKG_VERSION")),
    }
}
