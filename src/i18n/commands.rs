//! Help, settings, and start-meeting command strings.

use jitsi_core::message::MessageKey;

pub(super) fn lookup(key: MessageKey, lang: &str) -> Option<&'static str> {
    let text = match key {
        MessageKey::HelpTitle => match lang {
            "es" => "###### Plugin Jitsi para Mattermost - Ayuda de comandos\n",
            "de" => "###### Mattermost Jitsi Plugin - Hilfe zu Slash-Befehlen\n",
            "fr" => "###### Plugin Jitsi pour Mattermost - Aide des commandes\n",
            _ => "###### Mattermost Jitsi Plugin - Slash Command help\n",
        },
        MessageKey::HelpText => match lang {
            "es" => HELP_ES,
            "de" => HELP_DE,
            "fr" => HELP_FR,
            _ => HELP_EN,
        },
        MessageKey::SettingsCurrentValues => match lang {
            "es" => "###### Ajustes de Jitsi:\n* Integrado: `{{ embedded }}`\n* Mostrar p\u{00e1}gina previa: `{{ show_prejoin_page }}`\n* Esquema de nombres: `{{ naming_scheme }}`",
            "de" => "###### Jitsi-Einstellungen:\n* Eingebettet: `{{ embedded }}`\n* Vorschaltseite anzeigen: `{{ show_prejoin_page }}`\n* Namensschema: `{{ naming_scheme }}`",
            "fr" => "###### Param\u{00e8}tres Jitsi :\n* Int\u{00e9}gr\u{00e9} : `{{ embedded }}`\n* Afficher la page d'accueil : `{{ show_prejoin_page }}`\n* Sch\u{00e9}ma de nommage : `{{ naming_scheme }}`",
            _ => "###### Jitsi Settings:\n* Embedded: `{{ embedded }}`\n* Show Pre-join Page: `{{ show_prejoin_page }}`\n* Naming Scheme: `{{ naming_scheme }}`",
        },
        MessageKey::SettingsUnableToGet => match lang {
            "es" => "No se pudieron obtener los ajustes del usuario",
            "de" => "Benutzereinstellungen konnten nicht geladen werden",
            "fr" => "Impossible de r\u{00e9}cup\u{00e9}rer les param\u{00e8}tres utilisateur",
            _ => "Unable to get user settings",
        },
        MessageKey::SettingsUnableToSet => match lang {
            "es" => "No se pudieron guardar los ajustes del usuario",
            "de" => "Benutzereinstellungen konnten nicht gespeichert werden",
            "fr" => "Impossible d'enregistrer les param\u{00e8}tres utilisateur",
            _ => "Unable to set user settings",
        },
        MessageKey::SettingsInvalidParameters => match lang {
            "es" => "Par\u{00e1}metros de ajustes no v\u{00e1}lidos",
            "de" => "Ung\u{00fc}ltige Einstellungsparameter",
            "fr" => "Param\u{00e8}tres de configuration invalides",
            _ => "Invalid settings parameters",
        },
        MessageKey::SettingsWrongEmbeddedValue => match lang {
            "es" => "Valor de `embedded` no v\u{00e1}lido, usa `true` o `false`.",
            "de" => "Ung\u{00fc}ltiger Wert f\u{00fc}r `embedded`, verwende `true` oder `false`.",
            "fr" => "Valeur `embedded` invalide, utilisez `true` ou `false`.",
            _ => "Invalid `embedded` value, use `true` or `false`.",
        },
        MessageKey::SettingsWrongShowPrejoinPageValue => match lang {
            "es" => "Valor de `show_prejoin_page` no v\u{00e1}lido, usa `true` o `false`.",
            "de" => "Ung\u{00fc}ltiger Wert f\u{00fc}r `show_prejoin_page`, verwende `true` oder `false`.",
            "fr" => "Valeur `show_prejoin_page` invalide, utilisez `true` ou `false`.",
            _ => "Invalid `show_prejoin_page` value, use `true` or `false`.",
        },
        MessageKey::SettingsWrongNamingSchemeValue => match lang {
            "es" => "Valor de `naming_scheme` no v\u{00e1}lido, usa `ask`, `words`, `uuid` o `mattermost`.",
            "de" => "Ung\u{00fc}ltiger Wert f\u{00fc}r `naming_scheme`, verwende `ask`, `words`, `uuid` oder `mattermost`.",
            "fr" => "Valeur `naming_scheme` invalide, utilisez `ask`, `words`, `uuid` ou `mattermost`.",
            _ => "Invalid `naming_scheme` value, use `ask`, `words`, `uuid` or `mattermost`.",
        },
        MessageKey::SettingsWrongField => match lang {
            "es" => "Campo de ajustes no v\u{00e1}lido, usa `embedded`, `show_prejoin_page` o `naming_scheme`.",
            "de" => "Ung\u{00fc}ltiges Einstellungsfeld, verwende `embedded`, `show_prejoin_page` oder `naming_scheme`.",
            "fr" => "Champ de configuration invalide, utilisez `embedded`, `show_prejoin_page` ou `naming_scheme`.",
            _ => "Invalid config field, use `embedded`, `show_prejoin_page` or `naming_scheme`.",
        },
        MessageKey::SettingsUpdated => match lang {
            "es" => "Ajustes de Jitsi actualizados:\n\n* {{ field }}: `{{ value }}`",
            "de" => "Jitsi-Einstellungen aktualisiert:\n\n* {{ field }}: `{{ value }}`",
            "fr" => "Param\u{00e8}tres Jitsi mis \u{00e0} jour :\n\n* {{ field }} : `{{ value }}`",
            _ => "Jitsi settings updated:\n\n* {{ field }}: `{{ value }}`",
        },
        MessageKey::StartFailed => match lang {
            "es" => "No pudimos iniciar una reuni\u{00f3}n en este momento.",
            "de" => "Wir konnten gerade kein Meeting starten.",
            "fr" => "Nous n'avons pas pu d\u{00e9}marrer de r\u{00e9}union pour le moment.",
            _ => "We could not start a meeting at this time.",
        },
        _ => return None,
    };
    Some(text)
}

const HELP_EN: &str = "* `/{{ trigger }}` - Create a new meeting
* `/{{ trigger }} start [topic]` - Create a new meeting with specified topic
* `/{{ trigger }} help` - Show this help text
* `/{{ trigger }} settings see` - View your current user settings for the Jitsi plugin
* `/{{ trigger }} settings [setting] [value]` - Update your user settings (see below for options)

###### Jitsi Settings:
* `/{{ trigger }} settings embedded [true/false]`: (Experimental) When true, Jitsi meeting is embedded as a floating window inside Mattermost. When false, Jitsi meeting opens in a new window.
* `/{{ trigger }} settings show_prejoin_page [true/false]`: When false, pre-join page will not be displayed when Jitsi meet is embedded inside Mattermost.
* `/{{ trigger }} settings naming_scheme [words/uuid/mattermost/ask]`: Select how meeting names are generated with one of these options:
    * `words`: Random English words in title case (e.g. PlayfulDragonsObserveCuriously)
    * `uuid`: UUID (universally unique identifier)
    * `mattermost`: Mattermost specific names. Combination of team name, channel name and random text in public and private channels; personal meeting name in direct and group messages channels.
    * `ask`: The plugin asks you to select the name every time you start a meeting";

const HELP_ES: &str = "* `/{{ trigger }}` - Crea una nueva reuni\u{00f3}n
* `/{{ trigger }} start [tema]` - Crea una nueva reuni\u{00f3}n con el tema indicado
* `/{{ trigger }} help` - Muestra esta ayuda
* `/{{ trigger }} settings see` - Muestra tus ajustes actuales del plugin Jitsi
* `/{{ trigger }} settings [ajuste] [valor]` - Actualiza tus ajustes (opciones abajo)

###### Ajustes de Jitsi:
* `/{{ trigger }} settings embedded [true/false]`: (Experimental) Con true, la reuni\u{00f3}n se integra como ventana flotante dentro de Mattermost. Con false, se abre en una ventana nueva.
* `/{{ trigger }} settings show_prejoin_page [true/false]`: Con false, no se muestra la p\u{00e1}gina previa cuando la reuni\u{00f3}n est\u{00e1} integrada.
* `/{{ trigger }} settings naming_scheme [words/uuid/mattermost/ask]`: Elige c\u{00f3}mo se generan los nombres de las reuniones:
    * `words`: Palabras en ingl\u{00e9}s al azar (p. ej. PlayfulDragonsObserveCuriously)
    * `uuid`: UUID (identificador \u{00fa}nico universal)
    * `mattermost`: Nombres propios de Mattermost. Equipo, canal y texto aleatorio en canales p\u{00fa}blicos y privados; nombre personal en mensajes directos y de grupo.
    * `ask`: El plugin te pregunta el nombre cada vez que inicias una reuni\u{00f3}n";

const HELP_DE: &str = "* `/{{ trigger }}` - Neues Meeting erstellen
* `/{{ trigger }} start [Thema]` - Neues Meeting mit dem angegebenen Thema erstellen
* `/{{ trigger }} help` - Diese Hilfe anzeigen
* `/{{ trigger }} settings see` - Deine aktuellen Jitsi-Einstellungen anzeigen
* `/{{ trigger }} settings [Einstellung] [Wert]` - Deine Einstellungen \u{00e4}ndern (Optionen siehe unten)

###### Jitsi-Einstellungen:
* `/{{ trigger }} settings embedded [true/false]`: (Experimentell) Bei true wird das Meeting als schwebendes Fenster in Mattermost eingebettet. Bei false \u{00f6}ffnet es sich in einem neuen Fenster.
* `/{{ trigger }} settings show_prejoin_page [true/false]`: Bei false wird die Vorschaltseite im eingebetteten Modus nicht angezeigt.
* `/{{ trigger }} settings naming_scheme [words/uuid/mattermost/ask]`: W\u{00e4}hle, wie Meetingnamen erzeugt werden:
    * `words`: Zuf\u{00e4}llige englische W\u{00f6}rter (z. B. PlayfulDragonsObserveCuriously)
    * `uuid`: UUID (universell eindeutige Kennung)
    * `mattermost`: Mattermost-spezifische Namen. Team, Kanal und Zufallstext in \u{00f6}ffentlichen und privaten Kan\u{00e4}len; pers\u{00f6}nlicher Name in Direkt- und Gruppennachrichten.
    * `ask`: Das Plugin fragt bei jedem Meetingstart nach dem Namen";

const HELP_FR: &str = "* `/{{ trigger }}` - Cr\u{00e9}er une nouvelle r\u{00e9}union
* `/{{ trigger }} start [sujet]` - Cr\u{00e9}er une nouvelle r\u{00e9}union avec le sujet indiqu\u{00e9}
* `/{{ trigger }} help` - Afficher cette aide
* `/{{ trigger }} settings see` - Voir vos param\u{00e8}tres Jitsi actuels
* `/{{ trigger }} settings [param\u{00e8}tre] [valeur]` - Modifier vos param\u{00e8}tres (options ci-dessous)

###### Param\u{00e8}tres Jitsi :
* `/{{ trigger }} settings embedded [true/false]` : (Exp\u{00e9}rimental) Avec true, la r\u{00e9}union s'affiche dans une fen\u{00ea}tre flottante dans Mattermost. Avec false, elle s'ouvre dans une nouvelle fen\u{00ea}tre.
* `/{{ trigger }} settings show_prejoin_page [true/false]` : Avec false, la page d'accueil n'est pas affich\u{00e9}e en mode int\u{00e9}gr\u{00e9}.
* `/{{ trigger }} settings naming_scheme [words/uuid/mattermost/ask]` : Choisir comment les noms de r\u{00e9}union sont g\u{00e9}n\u{00e9}r\u{00e9}s :
    * `words` : Mots anglais al\u{00e9}atoires (ex. PlayfulDragonsObserveCuriously)
    * `uuid` : UUID (identifiant unique universel)
    * `mattermost` : Noms propres \u{00e0} Mattermost. \u{00c9}quipe, canal et texte al\u{00e9}atoire dans les canaux publics et priv\u{00e9}s ; nom personnel dans les messages directs et de groupe.
    * `ask` : Le plugin vous demande le nom \u{00e0} chaque d\u{00e9}marrage de r\u{00e9}union";
