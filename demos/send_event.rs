//! Send one event hit.
//!
//! Uses `HITQ_ENDPOINT` and `GOOGLE_ANALYTICS_TRACKING` when set, so
//! `GOOGLE_ANALYTICS_TRACKING=false cargo run --example send_event` only
//! prints the URI it would post.

use hitq::PostOutcome;

fn main() -> Result<(), hitq::Error> {
    env_logger::init();
    hitq::log_welcome();

    let tracking_id = std::env::args().nth(1).unwrap_or_else(|| "UA-XXXX-Y".to_string());

    let mut builder = hitq::from_env()?;
    builder
        .with_v1()
        .with_tid(tracking_id)
        .with_cid_as_random_uuid()
        .with_t_as_event()
        .with_ec("video")?
        .with_ea("play")?
        .with_el("holiday")?
        .with_ev(300)?;

    println!("{}", builder.escaped_uri());

    match builder.do_post()? {
        PostOutcome::Delivered { status, .. } => println!("delivered ({status})"),
        PostOutcome::Disabled => println!("tracking disabled, nothing sent"),
    }

    Ok(())
}
