//! Static UI string catalogs.

use super::Locale;

/// Display names of every locale, as shown by the language selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageNames {
    pub en: &'static str,
    pub pt: &'static str,
    pub es: &'static str,
    pub fr: &'static str,
    pub it: &'static str,
}

impl LanguageNames {
    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Pt => self.pt,
            Locale::Es => self.es,
            Locale::Fr => self.fr,
            Locale::It => self.it,
        }
    }
}

/// Labels of the share controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareLabels {
    pub title: &'static str,
    pub whatsapp: &'static str,
    pub instagram: &'static str,
    pub twitter: &'static str,
    pub facebook: &'static str,
    pub copy: &'static str,
    pub copied: &'static str,
    pub copy_failed: &'static str,
    pub copy_manual: &'static str,
}

/// Fixed UI strings of one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub click_prompt: &'static str,
    pub retry_prompt: &'static str,
    pub today_label: &'static str,
    pub fortune_label: &'static str,
    pub ancient_wisdom: &'static str,
    pub footer_text: &'static str,
    pub language_names: LanguageNames,
    pub share_labels: ShareLabels,
}

const LANGUAGE_NAMES: LanguageNames = LanguageNames {
    en: "English",
    pt: "Português",
    es: "Español",
    fr: "Français",
    it: "Italiano",
};

const FORTUNE_LABEL: &str = "運命";
const ANCIENT_WISDOM: &str = "古からの智慧";

static EN: Catalog = Catalog {
    title: "Fortune Cookie",
    subtitle: "",
    click_prompt: "Click the fortune cookie to reveal your message",
    retry_prompt: "Try another fortune",
    today_label: "Today your message is:",
    fortune_label: FORTUNE_LABEL,
    ancient_wisdom: ANCIENT_WISDOM,
    footer_text: "by Thaís Brandaoり",
    language_names: LANGUAGE_NAMES,
    share_labels: ShareLabels {
        title: "Share your fortune",
        whatsapp: "Share on WhatsApp",
        instagram: "Share on Instagram",
        twitter: "Share on Twitter",
        facebook: "Share on Facebook",
        copy: "Copy message",
        copied: "Copied!",
        copy_failed: "Copy failed - try manual copy",
        copy_manual: "Please copy manually:",
    },
};

static PT: Catalog = Catalog {
    title: "Biscoito da Sorte",
    subtitle: "",
    click_prompt: "Clique no biscoito da sorte para revelar sua mensagem",
    retry_prompt: "Tentar outra sorte",
    today_label: "Sua mensagem de hoje é:",
    fortune_label: FORTUNE_LABEL,
    ancient_wisdom: ANCIENT_WISDOM,
    footer_text: "por Thaís Brandaoり",
    language_names: LANGUAGE_NAMES,
    share_labels: ShareLabels {
        title: "Compartilhe sua sorte",
        whatsapp: "Compartilhar no WhatsApp",
        instagram: "Compartilhar no Instagram",
        twitter: "Compartilhar no Twitter",
        facebook: "Compartilhar no Facebook",
        copy: "Copiar mensagem",
        copied: "Copiado!",
        copy_failed: "Falha na cópia - tente copiar manualmente",
        copy_manual: "Por favor, copie manualmente:",
    },
};

static ES: Catalog = Catalog {
    title: "Galleta de la Fortuna",
    subtitle: "",
    click_prompt: "Haz clic en la galleta de la fortuna para revelar tu mensaje",
    retry_prompt: "Probar otra fortuna",
    today_label: "Tu mensaje de hoy es:",
    fortune_label: FORTUNE_LABEL,
    ancient_wisdom: ANCIENT_WISDOM,
    footer_text: "por Thaís Brandaoり",
    language_names: LANGUAGE_NAMES,
    share_labels: ShareLabels {
        title: "Comparte tu fortuna",
        whatsapp: "Compartir en WhatsApp",
        instagram: "Compartir en Instagram",
        twitter: "Compartir en Twitter",
        facebook: "Compartir en Facebook",
        copy: "Copiar mensaje",
        copied: "¡Copiado!",
        copy_failed: "Error al copiar - intenta copiar manualmente",
        copy_manual: "Por favor, copia manualmente:",
    },
};

static FR: Catalog = Catalog {
    title: "Biscuit de Fortune",
    subtitle: "",
    click_prompt: "Cliquez sur le biscuit de fortune pour révéler votre message",
    retry_prompt: "Essayer une autre fortune",
    today_label: "Votre message d'aujourd'hui est :",
    fortune_label: FORTUNE_LABEL,
    ancient_wisdom: ANCIENT_WISDOM,
    footer_text: "par Thaís Brandaoり",
    language_names: LANGUAGE_NAMES,
    share_labels: ShareLabels {
        title: "Partagez votre fortune",
        whatsapp: "Partager sur WhatsApp",
        instagram: "Partager sur Instagram",
        twitter: "Partager sur Twitter",
        facebook: "Partager sur Facebook",
        copy: "Copier le message",
        copied: "Copié !",
        copy_failed: "Échec de la copie - essayez de copier manuellement",
        copy_manual: "Veuillez copier manuellement :",
    },
};

static IT: Catalog = Catalog {
    title: "Biscotto della Fortuna",
    subtitle: "",
    click_prompt: "Clicca sul biscotto della fortuna per rivelare il tuo messaggio",
    retry_prompt: "Prova un'altra fortuna",
    today_label: "Il tuo messaggio di oggi è:",
    fortune_label: FORTUNE_LABEL,
    ancient_wisdom: ANCIENT_WISDOM,
    footer_text: "di Thaís Brandaoり",
    language_names: LANGUAGE_NAMES,
    share_labels: ShareLabels {
        title: "Condividi la tua fortuna",
        whatsapp: "Condividi su WhatsApp",
        instagram: "Condividi su Instagram",
        twitter: "Condividi su Twitter",
        facebook: "Condividi su Facebook",
        copy: "Copia messaggio",
        copied: "Copiato!",
        copy_failed: "Copia fallita - prova a copiare manualmente",
        copy_manual: "Per favore, copia manualmente:",
    },
};

pub(super) fn for_locale(locale: Locale) -> &'static Catalog {
    match locale {
        Locale::En => &EN,
        Locale::Pt => &PT,
        Locale::Es => &ES,
        Locale::Fr => &FR,
        Locale::It => &IT,
    }
}
