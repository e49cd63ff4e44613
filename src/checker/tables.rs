//! Compiled-in lookup tables for the ignore filter and the completion tiers.
//! Keys are lower case.

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

lazy_static! {
    /// Abbreviations, chat slang and technical or brand terms that are never
    /// reported, in English and Spanish.
    pub static ref IGNORED_WORDS: HashSet<&'static str> = [
        // English abbreviations and slang
        "etc", "vs", "ie", "eg", "approx", "misc", "asap", "fyi", "btw", "imo", "imho",
        "idk", "tbh", "lol", "lmao", "omg", "brb", "thx", "pls", "plz", "np", "ty",
        "gonna", "wanna", "gotta", "kinda", "sorta", "ok", "okay", "yeah", "nope", "yep",
        // Spanish abbreviations and slang
        "sr", "sra", "srta", "dr", "dra", "ud", "uds", "pq", "xq", "q", "tb", "tmb",
        "porfa", "finde", "jaja", "jajaja", "xd", "bno", "ntp", "dnd", "vale", "tqm",
        // Technical and brand terms
        "api", "apis", "url", "urls", "html", "css", "json", "xml", "pdf", "csv", "sql",
        "http", "https", "wifi", "app", "apps", "email", "emails", "online", "login",
        "logout", "signup", "backend", "frontend", "github", "gitlab", "google", "youtube",
        "iphone", "ipad", "android", "whatsapp", "instagram", "facebook", "tiktok",
        "linkedin", "zoom", "slack", "javascript", "typescript", "python", "rust",
        "docker", "kubernetes", "npm", "ui", "ux", "ai", "chatbot", "smartphone",
    ]
    .into_iter()
    .collect();

    /// Short prefixes (1-3 chars) to whole-word completions, most likely first.
    pub static ref PREFIX_COMPLETIONS: HashMap<&'static str, &'static [&'static str]> = {
        let entries: [(&'static str, &'static [&'static str]); 47] = [
            ("a", &["about", "after", "again", "always"]),
            ("ab", &["about", "above", "abrazo"]),
            ("ac", &["actually", "account", "acuerdo"]),
            ("ag", &["again", "agradecido", "agua"]),
            ("al", &["also", "always", "already", "algo"]),
            ("b", &["because", "before", "bien", "buenos"]),
            ("be", &["because", "before", "better", "besos"]),
            ("bec", &["because"]),
            ("bu", &["buenos", "buenas", "business"]),
            ("bue", &["buenos", "buenas", "bueno"]),
            ("c", &["could", "como", "cuando", "call"]),
            ("co", &["could", "como", "contigo", "company"]),
            ("cu", &["cuando", "cuanto", "customer"]),
            ("d", &["definitely", "different", "donde", "despues"]),
            ("de", &["definitely", "decir", "desde", "después"]),
            ("di", &["different", "dinero", "dirección"]),
            ("e", &["everything", "everyone", "entonces", "estoy"]),
            ("es", &["estoy", "estamos", "español", "especially"]),
            ("ev", &["everything", "everyone", "every"]),
            ("g", &["gracias", "great", "good"]),
            ("gr", &["gracias", "great", "grande"]),
            ("gra", &["gracias", "grande"]),
            ("h", &["hello", "have", "how", "hola"]),
            ("ha", &["have", "happy", "hablar"]),
            ("he", &["hello", "help", "here", "hermano"]),
            ("hel", &["hello", "help", "helpful"]),
            ("ho", &["hola", "how", "hope", "hoy"]),
            ("i", &["important", "information", "interesting"]),
            ("im", &["important", "impossible"]),
            ("in", &["information", "interesting", "instead"]),
            ("m", &["maybe", "meeting", "mañana", "mucho"]),
            ("ma", &["maybe", "mañana", "manager"]),
            ("me", &["meeting", "message", "mejor"]),
            ("mu", &["mucho", "muchas", "muy"]),
            ("n", &["necesito", "nothing", "noches"]),
            ("ne", &["necesito", "necessary", "never"]),
            ("nec", &["necesito", "necessary", "necesitamos"]),
            ("p", &["please", "porque", "problem", "people"]),
            ("pl", &["please", "pleasure"]),
            ("ple", &["please", "pleasure"]),
            ("po", &["porque", "possible", "podemos"]),
            ("pr", &["problem", "probably", "project", "pronto"]),
            ("qu", &["question", "quiero", "quick"]),
            ("qui", &["quiero", "quick", "quisiera"]),
            ("th", &["thanks", "that", "there", "think"]),
            ("tha", &["thanks", "thank", "that"]),
            ("wh", &["what", "when", "where", "which"]),
        ];
        entries.into_iter().collect()
    };

    /// Two-word context to multi-word continuations.
    pub static ref TWO_WORD_PHRASES: HashMap<&'static str, &'static [&'static str]> = {
        let entries: [(&'static str, &'static [&'static str]); 16] = [
            ("thank you", &["very much", "for your help"]),
            ("how are", &["you"]),
            ("let me", &["know"]),
            ("as soon", &["as possible"]),
            ("see you", &["soon", "tomorrow"]),
            ("looking forward", &["to hearing from you"]),
            ("i hope", &["you are doing well"]),
            ("have a", &["great day", "nice weekend"]),
            ("muchas gracias", &["por todo"]),
            ("buenos días", &["a todos"]),
            ("por favor", &["avísame"]),
            ("te quiero", &["mucho"]),
            ("hasta la", &["vista", "próxima"]),
            ("qué tal", &["estás"]),
            ("nos vemos", &["pronto", "mañana"]),
            ("lo siento", &["mucho"]),
        ];
        entries.into_iter().collect()
    };

    /// Single word to multi-word continuations.
    pub static ref PHRASE_COMPLETIONS: HashMap<&'static str, &'static [&'static str]> = {
        let entries: [(&'static str, &'static [&'static str]); 10] = [
            ("thank", &["you very much"]),
            ("how", &["are you"]),
            ("nice", &["to meet you"]),
            ("best", &["regards"]),
            ("kind", &["regards"]),
            ("buenos", &["días"]),
            ("buenas", &["noches", "tardes"]),
            ("encantado", &["de conocerte"]),
            ("mucho", &["gusto"]),
            ("cómo", &["estás"]),
        ];
        entries.into_iter().collect()
    };

    /// Single word to the most likely next word.
    pub static ref NEXT_WORD: HashMap<&'static str, &'static [&'static str]> = {
        let entries: [(&'static str, &'static [&'static str]); 20] = [
            ("muchas", &["gracias"]),
            ("good", &["morning", "night", "luck"]),
            ("hello", &["there"]),
            ("hola", &["amigo"]),
            ("happy", &["birthday"]),
            ("feliz", &["cumpleaños", "navidad"]),
            ("excuse", &["me"]),
            ("por", &["favor"]),
            ("de", &["nada"]),
            ("muy", &["bien"]),
            ("lo", &["siento"]),
            ("te", &["quiero"]),
            ("i", &["am", "think", "have"]),
            ("you", &["are"]),
            ("we", &["are"]),
            ("thanks", &["again"]),
            ("sounds", &["good"]),
            ("no", &["problem"]),
            ("sin", &["embargo"]),
            ("hasta", &["luego"]),
        ];
        entries.into_iter().collect()
    };
}
