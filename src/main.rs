use clap::Parser;
use event_calendar::{calendar, cli, config, views};

fn main() {
    env_logger::builder().init();

    let cli = cli::Cli::parse();
    let config = config::init(&cli.config).expect("Could not load the configuration file");
    let events = calendar::load_events(&config.events).expect("Could not load the events file");

    log::info!(
        "Loaded {} events from {}",
        events.len(),
        config.events.display()
    );

    let date = cli.date.unwrap_or_else(|| chrono::Local::now().date_naive());

    let output = match cli.view {
        cli::View::Month => views::month::render(&events, date),
        cli::View::Week => views::week::render(&events, date),
        cli::View::Agenda => views::agenda::render(
            &events,
            date,
            config.display.agenda_days,
            config.display.timezone(),
        ),
    };

    print!("{output}");
}
