use anyhow::{Context, Result};
use asana_coach::{
    session::{Session, resolve_selection},
    source::{LandmarkSource, ReplaySource},
};

const USAGE: &str = "usage: asana-coach <pose: 1-5 or name> <replay.jsonl>\n\
    poses: 1 crucifix, 2 hands-raised, 3 cat, 4 balasana, 5 dandasana";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let selection = args.next().context(USAGE)?;
    let replay_path = args.next().context(USAGE)?;

    let pose = resolve_selection(&selection)?;
    let session = Session::new(pose);
    let mut source = ReplaySource::open(&replay_path)
        .with_context(|| format!("failed to open replay {replay_path}"))?;

    log::info!("checking {} against {replay_path}", pose.display_name());

    let mut frames = 0usize;
    let mut matched = 0usize;

    // Each frame runs to completion before the next one is pulled.
    while let Some(set) = source.next_frame()? {
        frames += 1;
        if set.is_empty() {
            log::debug!("frame {frames}: no landmarks detected");
            continue;
        }
        let verdict = session.classify(&set);
        if verdict.matched {
            matched += 1;
        }
        println!("{}", verdict.status_line());
    }

    println!("{}: matched {matched} of {frames} frames", pose.display_name());
    Ok(())
}
