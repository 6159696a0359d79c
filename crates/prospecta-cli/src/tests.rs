use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["prospecta-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_score_command() {
    let cli = Cli::try_parse_from(["prospecta-cli", "score", "--file", "place.json"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Score { ref file }) if file == &PathBuf::from("place.json")
    ));
}

#[test]
fn parses_niche_with_free_text() {
    let cli = Cli::try_parse_from(["prospecta-cli", "niche", "Peluquería y Spa"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Niche { category: Some(ref c) }) if c == "Peluquería y Spa"
    ));
}

#[test]
fn niche_category_is_optional() {
    let cli = Cli::try_parse_from(["prospecta-cli", "niche"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Niche { category: None })
    ));
}

#[test]
fn parses_compose_command() {
    let cli = Cli::try_parse_from([
        "prospecta-cli",
        "compose",
        "--lead",
        "lead.json",
        "--template",
        "sin_web",
        "--channel",
        "email",
        "--context",
        "Conocido de feria",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Compose {
            template: OutreachTemplate::SinWeb,
            channel: Channel::Email,
            context: Some(_),
            ..
        })
    ));
}

#[test]
fn parses_reply_command() {
    let cli = Cli::try_parse_from([
        "prospecta-cli",
        "reply",
        "--lead",
        "lead.json",
        "--conversation",
        "thread.json",
        "--tone",
        "cerrar_cita",
        "--channel",
        "whatsapp",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Reply {
            tone: ReplyTone::CerrarCita,
            channel: Channel::Whatsapp,
            context: None,
            ..
        })
    ));
}

#[test]
fn rejects_unknown_template() {
    let result = Cli::try_parse_from([
        "prospecta-cli",
        "compose",
        "--lead",
        "lead.json",
        "--template",
        "spam",
        "--channel",
        "email",
    ]);
    assert!(result.is_err());
}
