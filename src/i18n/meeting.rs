//! Meeting-start strings.

use jitsi_core::message::MessageKey;

pub(super) fn lookup(key: MessageKey, lang: &str) -> Option<&'static str> {
    let text = match key {
        MessageKey::AskMeetingName => match lang {
            "es" => "Tu esquema de nombres es `ask`. Inicia la reuni\u{00f3}n con un tema: `/{{ trigger }} start [tema]`.",
            "de" => "Dein Namensschema ist `ask`. Starte das Meeting mit einem Thema: `/{{ trigger }} start [Thema]`.",
            "fr" => "Votre sch\u{00e9}ma de nommage est `ask`. D\u{00e9}marrez la r\u{00e9}union avec un sujet : `/{{ trigger }} start [sujet]`.",
            _ => "Your naming scheme is `ask`. Start the meeting with a topic: `/{{ trigger }} start [topic]`.",
        },
        MessageKey::MeetingStarted => match lang {
            "es" => "Reuni\u{00f3}n iniciada: **{{ topic }}**\n{{ url }}",
            "de" => "Meeting gestartet: **{{ topic }}**\n{{ url }}",
            "fr" => "R\u{00e9}union d\u{00e9}marr\u{00e9}e : **{{ topic }}**\n{{ url }}",
            _ => "Meeting started: **{{ topic }}**\n{{ url }}",
        },
        _ => return None,
    };
    Some(text)
}
