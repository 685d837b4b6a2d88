use clap::{App, Arg, ArgMatches};
use env_logger::Env;
use log::{error, info};
use tagio::{Descriptor, Endpoint, Host, MemoryHost, NoHost, Outcome, Transfer, TransferOpts};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn load_world(world: &Descriptor) -> Result<MemoryHost> {
    let mut source = world
        .resolve_source(&NoHost)
        .ok_or_else(|| format!("cannot open world {}", world))?;
    let snapshot = source.read(&mut NoHost)?;
    Ok(MemoryHost::from_snapshot(&snapshot)?)
}

fn save_world(world: &Descriptor, host: &MemoryHost) -> Result<()> {
    let mut dest = world
        .resolve_destination(&NoHost)
        .ok_or_else(|| format!("cannot save world to {}", world))?;
    dest.write(&mut NoHost, &host.to_snapshot()?)?;
    info!("saved {}", world);
    Ok(())
}

/// Only writes to live objects change the world. A world given as literal
/// text cannot take those writes, so such a transfer is refused before it
/// starts.
fn world_needs_save(world: &Descriptor, to: Option<&Descriptor>) -> Result<bool> {
    match (world, to) {
        (Descriptor::Snbt(_), Some(to @ Descriptor::Live(_))) => {
            Err(format!("cannot write to {} in a world given as literal snbt", to).into())
        }
        (_, Some(Descriptor::Live(_))) => Ok(true),
        _ => Ok(false),
    }
}

fn print_rendered(text: &str, json: bool) -> Result<()> {
    if json {
        let value = tagsnbt::from_str(text)?;
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", text);
    }
    Ok(())
}

fn run(args: &ArgMatches) -> Result<bool> {
    let descriptor = |name: &str| args.value_of(name).map(str::parse::<Descriptor>).transpose();

    let from = descriptor("from")?.ok_or("--from is required")?;
    let to = descriptor("to")?;
    let world = descriptor("world")?;
    let opts = TransferOpts {
        strict_destination: args.is_present("strict"),
    };

    let save = match &world {
        Some(world) => world_needs_save(world, to.as_ref())?,
        None => false,
    };

    let mut no_host = NoHost;
    let mut memory = match &world {
        Some(world) => Some(load_world(world)?),
        None => None,
    };
    let host: &mut dyn Host = match &mut memory {
        Some(memory) => memory,
        None => &mut no_host,
    };

    match Transfer::new(from, to).with_opts(opts).run(host) {
        Ok(Outcome::Rendered(text)) => print_rendered(&text, args.is_present("json"))?,
        Ok(Outcome::Written) => {
            if let (true, Some(world), Some(memory)) = (save, &world, &memory) {
                save_world(world, memory)?;
            }
        }
        Err(e) => {
            match std::error::Error::source(&e) {
                Some(cause) => error!("{}: {}", e, cause),
                None => error!("{}", e),
            }
            return Ok(false);
        }
    }

    Ok(true)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let matches = App::new("nbt")
        .about("Copy NBT between files, sNBT text and world objects")
        .arg(
            Arg::with_name("from")
                .long("from")
                .takes_value(true)
                .required(true)
                .help("source, e.g. bin:level.dat, snbt:item.snbt, text:{a:1}, entity:@e, slot:0"),
        )
        .arg(
            Arg::with_name("to")
                .long("to")
                .takes_value(true)
                .required(false)
                .help("destination; without one the source is printed as sNBT"),
        )
        .arg(
            Arg::with_name("world")
                .long("world")
                .takes_value(true)
                .required(false)
                .help("world snapshot file providing live objects, e.g. snbt:world.snbt"),
        )
        .arg(
            Arg::with_name("strict")
                .long("strict")
                .takes_value(false)
                .required(false)
                .help("fail instead of printing when the destination cannot be found"),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .takes_value(false)
                .required(false)
                .help("print as JSON instead of sNBT"),
        )
        .get_matches();

    if !run(&matches)? {
        std::process::exit(1);
    }

    Ok(())
}
