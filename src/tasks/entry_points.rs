use crate::FailResult;
use crate::config::Settings;
use crate::logging::GlobalLogger;

use std::ffi::OsStr;
use std::fs::File;
use std::path::PathBuf;

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        for cause in e.iter_chain() {
            error!("{}", cause);
        }

        if std::env::var_os("RUST_BACKTRACE") == Some(OsStr::new("1").to_owned()) {
            error!("{}", e.backtrace());
        }
        std::process::exit(1);
    });
}

/// Everything `dmat-demo` reads from its command line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub log: Option<PathBuf>,
    pub verbosity: u64,
}

impl CliArgs {
    pub fn clap_app<'a, 'b>() -> clap::App<'a, 'b>
    {
        clap::App::new("dmat-demo")
            .version(crate_version!())
            .about("Prints every matrix operation applied to a few sample matrices.")
            .args(&[
                clap::Arg::with_name("config")
                    .short("c").long("config")
                    .takes_value(true).value_name("CONFIG")
                    .help("YAML file with a list of named matrices and a scalar. \
                           Without it, a built-in pair of 2x2 matrices is used."),
                clap::Arg::with_name("log")
                    .long("log")
                    .takes_value(true).value_name("LOGFILE")
                    .help("also write the log to this file"),
                clap::Arg::with_name("verbose")
                    .short("v").long("verbose")
                    .multiple(true)
                    .help("log every determinant"),
            ])
    }

    pub fn from_matches(m: &clap::ArgMatches) -> Self
    { CliArgs {
        config: m.value_of_os("config").map(PathBuf::from),
        log: m.value_of_os("log").map(PathBuf::from),
        verbosity: m.occurrences_of("verbose"),
    }}

    pub fn load_settings(&self) -> FailResult<Settings>
    {
        match &self.config {
            None => {
                info!("no config given; using the built-in sample");
                Ok(Settings::sample())
            },
            Some(path) => {
                info!("reading config from '{}'", path.display());
                let file = File::open(path)
                    .map_err(|e| format_err!("could not open config '{}': {}", path.display(), e))?;
                Settings::from_reader(file)
            },
        }
    }
}

pub fn dmat_demo() {
    let args = CliArgs::from_matches(&CliArgs::clap_app().get_matches());

    let mut logger = GlobalLogger::default();
    logger.verbosity(args.verbosity);
    if let Some(path) = &args.log {
        logger.path(path);
    }
    if let Err(e) = logger.apply() {
        eprintln!("ERROR: could not set up logging: {}", e);
        std::process::exit(1);
    }

    wrap_result_main(|| {
        let settings = args.load_settings()?.validate()?;

        let stdout = std::io::stdout();
        let mut stdout = stdout.lock();
        crate::demo::write_report(&mut stdout, &settings)
    });
}
