// ISO 639-2 languages, generated from the iso-codes project (iso_639-2.json).
// Special codes (mis, mul, und, zxx, qaa-qtz) and language groups are left out.

pub struct Language {
    /// ISO 639-1 code, when the language has one
    pub alpha2: Option<&'static str>,
    /// ISO 639-2/T code
    pub alpha3: &'static str,
    /// ISO 639-2/B code, when it differs from the /T code
    pub bibliographic: Option<&'static str>,
    /// English names
    pub names: &'static [&'static str],
}

impl Language {
    /// Shortest code: ISO 639-1 if present, else ISO 639-2/T
    pub fn code(&self) -> &'static str {
        self.alpha2.unwrap_or(self.alpha3)
    }
}

#[rustfmt::skip]
pub const LANGUAGES: &[Language] = &[
    Language { alpha2: Some("aa"), alpha3: "aar", bibliographic: None, names: &["Afar"] },
    Language { alpha2: Some("ab"), alpha3: "abk", bibliographic: None, names: &["Abkhazian"] },
    Language { alpha2: None, alpha3: "ace", bibliographic: None, names: &["Achinese"] },
    Language { alpha2: None, alpha3: "ach", bibliographic: None, names: &["Acoli"] },
    Language { alpha2: None, alpha3: "ada", bibliographic: None, names: &["Adangme"] },
    Language { alpha2: None, alpha3: "ady", bibliographic: None, names: &["Adyghe", "Adygei"] },
    Language { alpha2: None, alpha3: "afh", bibliographic: None, names: &["Afrihili"] },
    Language { alpha2: Some("af"), alpha3: "afr", bibliographic: None, names: &["Afrikaans"] },
    Language { alpha2: None, alpha3: "ain", bibliographic: None, names: &["Ainu"] },
    Language { alpha2: Some("ak"), alpha3: "aka", bibliographic: None, names: &["Akan"] },
    Language { alpha2: None, alpha3: "akk", bibliographic: None, names: &["Akkadian"] },
    Language { alpha2: None, alpha3: "ale", bibliographic: None, names: &["Aleut"] },
    Language { alpha2: None, alpha3: "alt", bibliographic: None, names: &["Southern Altai"] },
    Language { alpha2: Some("am"), alpha3: "amh", bibliographic: None, names: &["Amharic"] },
    Language { alpha2: None, alpha3: "ang", bibliographic: None, names: &[] },
    Language { alpha2: None, alpha3: "anp", bibliographic: None, names: &["Angika"] },
    Language { alpha2: Some("ar"), alpha3: "ara", bibliographic: None, names: &["Arabic"] },
    Language { alpha2: None, alpha3: "arc", bibliographic: None, names: &[] },
    Language { alpha2: Some("an"), alpha3: "arg", bibliographic: None, names: &["Aragonese"] },
    Language { alpha2: None, alpha3: "arn", bibliographic: None, names: &["Mapudungun", "Mapuche"] },
    Language { alpha2: None, alpha3: "arp", bibliographic: None, names: &["Arapaho"] },
    Language { alpha2: None, alpha3: "arw", bibliographic: None, names: &["Arawak"] },
    Language { alpha2: Some("as"), alpha3: "asm", bibliographic: None, names: &["Assamese"] },
    Language { alpha2: None, alpha3: "ast", bibliographic: None, names: &["Asturian", "Bable", "Leonese", "Asturleonese"] },
    Language { alpha2: Some("av"), alpha3: "ava", bibliographic: None, names: &["Avaric"] },
    Language { alpha2: Some("ae"), alpha3: "ave", bibliographic: None, names: &["Avestan"] },
    Language { alpha2: None, alpha3: "awa", bibliographic: None, names: &["Awadhi"] },
    Language { alpha2: Some("ay"), alpha3: "aym", bibliographic: None, names: &["Aymara"] },
    Language { alpha2: Some("az"), alpha3: "aze", bibliographic: None, names: &["Azerbaijani"] },
    Language { alpha2: Some("ba"), alpha3: "bak", bibliographic: None, names: &["Bashkir"] },
    Language { alpha2: None, alpha3: "bal", bibliographic: None, names: &["Baluchi"] },
    Language { alpha2: Some("bm"), alpha3: "bam", bibliographic: None, names: &["Bambara"] },
    Language { alpha2: None, alpha3: "ban", bibliographic: None, names: &["Balinese"] },
    Language { alpha2: None, alpha3: "bas", bibliographic: None, names: &["Basa"] },
    Language { alpha2: None, alpha3: "bej", bibliographic: None, names: &["Beja", "Bedawiyet"] },
    Language { alpha2: Some("be"), alpha3: "bel", bibliographic: None, names: &["Belarusian"] },
    Language { alpha2: None, alpha3: "bem", bibliographic: None, names: &["Bemba"] },
    Language { alpha2: Some("bn"), alpha3: "ben", bibliographic: None, names: &["Bengali", "Bangla"] },
    Language { alpha2: None, alpha3: "bho", bibliographic: None, names: &["Bhojpuri"] },
    Language { alpha2: None, alpha3: "bik", bibliographic: None, names: &["Bikol"] },
    Language { alpha2: None, alpha3: "bin", bibliographic: None, names: &["Bini", "Edo"] },
    Language { alpha2: Some("bi"), alpha3: "bis", bibliographic: None, names: &["Bislama"] },
    Language { alpha2: None, alpha3: "bla", bibliographic: None, names: &["Siksika"] },
    Language { alpha2: None, alpha3: "bnt", bibliographic: None, names: &[] },
    Language { alpha2: Some("bo"), alpha3: "bod", bibliographic: Some("tib"), names: &["Tibetan"] },
    Language { alpha2: Some("bs"), alpha3: "bos", bibliographic: None, names: &["Bosnian"] },
    Language { alpha2: None, alpha3: "bra", bibliographic: None, names: &["Braj"] },
    Language { alpha2: Some("br"), alpha3: "bre", bibliographic: None, names: &["Breton"] },
    Language { alpha2: None, alpha3: "bua", bibliographic: None, names: &["Buriat"] },
    Language { alpha2: None, alpha3: "bug", bibliographic: None, names: &["Buginese"] },
    Language { alpha2: Some("bg"), alpha3: "bul", bibliographic: None, names: &["Bulgarian"] },
    Language { alpha2: None, alpha3: "byn", bibliographic: None, names: &["Blin", "Bilin"] },
    Language { alpha2: None, alpha3: "cad", bibliographic: None, names: &["Caddo"] },
    Language { alpha2: None, alpha3: "car", bibliographic: None, names: &["Galibi Carib"] },
    Language { alpha2: Some("ca"), alpha3: "cat", bibliographic: None, names: &["Catalan", "Valencian"] },
    Language { alpha2: None, alpha3: "ceb", bibliographic: None, names: &["Cebuano"] },
    Language { alpha2: Some("cs"), alpha3: "ces", bibliographic: Some("cze"), names: &["Czech"] },
    Language { alpha2: Some("ch"), alpha3: "cha", bibliographic: None, names: &["Chamorro"] },
    Language { alpha2: None, alpha3: "chb", bibliographic: None, names: &["Chibcha"] },
    Language { alpha2: Some("ce"), alpha3: "che", bibliographic: None, names: &["Chechen"] },
    Language { alpha2: None, alpha3: "chg", bibliographic: None, names: &["Chagatai"] },
    Language { alpha2: None, alpha3: "chk", bibliographic: None, names: &["Chuukese"] },
    Language { alpha2: None, alpha3: "chm", bibliographic: None, names: &["Mari"] },
    Language { alpha2: None, alpha3: "chn", bibliographic: None, names: &["Chinook jargon"] },
    Language { alpha2: None, alpha3: "cho", bibliographic: None, names: &["Choctaw"] },
    Language { alpha2: None, alpha3: "chp", bibliographic: None, names: &["Chipewyan", "Dene Suline"] },
    Language { alpha2: None, alpha3: "chr", bibliographic: None, names: &["Cherokee"] },
    Language { alpha2: Some("cu"), alpha3: "chu", bibliographic: None, names: &["Church Slavic", "Old Slavonic", "Church Slavonic", "Old Bulgarian", "Old Church Slavonic"] },
    Language { alpha2: Some("cv"), alpha3: "chv", bibliographic: None, names: &["Chuvash"] },
    Language { alpha2: None, alpha3: "chy", bibliographic: None, names: &["Cheyenne"] },
    Language { alpha2: None, alpha3: "cnr", bibliographic: None, names: &["Montenegrin"] },
    Language { alpha2: None, alpha3: "cop", bibliographic: None, names: &["Coptic"] },
    Language { alpha2: Some("kw"), alpha3: "cor", bibliographic: None, names: &["Cornish"] },
    Language { alpha2: Some("co"), alpha3: "cos", bibliographic: None, names: &["Corsican"] },
    Language { alpha2: None, alpha3: "cpe", bibliographic: None, names: &[] },
    Language { alpha2: None, alpha3: "cpf", bibliographic: None, names: &[] },
    Language { alpha2: None, alpha3: "cpp", bibliographic: None, names: &[] },
    Language { alpha2: Some("cr"), alpha3: "cre", bibliographic: None, names: &["Cree"] },
    Language { alpha2: None, alpha3: "crh", bibliographic: None, names: &["Crimean Tatar", "Crimean Turkish"] },
    Language { alpha2: None, alpha3: "crp", bibliographic: None, names: &["Creoles and pidgins"] },
    Language { alpha2: None, alpha3: "csb", bibliographic: None, names: &["Kashubian"] },
    Language { alpha2: Some("cy"), alpha3: "cym", bibliographic: Some("wel"), names: &["Welsh"] },
    Language { alpha2: None, alpha3: "dak", bibliographic: None, names: &["Dakota"] },
    Language { alpha2: Some("da"), alpha3: "dan", bibliographic: None, names: &["Danish"] },
    Language { alpha2: None, alpha3: "dar", bibliographic: None, names: &["Dargwa"] },
    Language { alpha2: None, alpha3: "del", bibliographic: None, names: &["Delaware"] },
    Language { alpha2: None, alpha3: "den", bibliographic: None, names: &[] },
    Language { alpha2: Some("de"), alpha3: "deu", bibliographic: Some("ger"), names: &["German"] },
    Language { alpha2: None, alpha3: "dgr", bibliographic: None, names: &["Dogrib"] },
    Language { alpha2: None, alpha3: "din", bibliographic: None, names: &["Dinka"] },
    Language { alpha2: Some("dv"), alpha3: "div", bibliographic: None, names: &["Divehi", "Dhivehi", "Maldivian"] },
    Language { alpha2: None, alpha3: "doi", bibliographic: None, names: &["Dogri"] },
    Language { alpha2: None, alpha3: "dsb", bibliographic: None, names: &["Lower Sorbian"] },
    Language { alpha2: None, alpha3: "dua", bibliographic: None, names: &["Duala"] },
    Language { alpha2: None, alpha3: "dum", bibliographic: None, names: &[] },
    Language { alpha2: None, alpha3: "dyu", bibliographic: None, names: &["Dyula"] },
    Language { alpha2: Some("dz"), alpha3: "dzo", bibliographic: None, names: &["Dzongkha"] },
    Language { alpha2: None, alpha3: "efi", bibliographic: None, names: &["Efik"] },
    Language { alpha2: None, alpha3: "egy", bibliographic: None, names: &[] },
    Language { alpha2: None, alpha3: "eka", bibliographic: None, names: &["Ekajuk"] },
    Language { alpha2: Some("el"), alpha3: "ell", bibliographic: Some("gre"), names: &[] },
    Language { alpha2: None, alpha3: "elx", bibliographic: None, names: &["Elamite"] },
    Language { alpha2: Some("en"), alpha3: "eng", bibliographic: None, names: &["English"] },
    Language { alpha2: None, alpha3: "enm", bibliographic: None, names: &[] },
    Language { alpha2: Some("eo"), alpha3: "epo", bibliographic: None, names: &["Esperanto"] },
    Language { alpha2: Some("et"), alpha3: "est", bibliographic: None, names: &["Estonian"] },
    Language { alpha2: Some("eu"), alpha3: "eus", bibliographic: Some("baq"), names: &["Basque"] },
    Language { alpha2: Some("ee"), alpha3: "ewe", bibliographic: None, names: &["Ewe"] },
    Language { alpha2: None, alpha3: "ewo", bibliographic: None, names: &["Ewondo"] },
    Language { alpha2: None, alpha3: "fan", bibliographic: None, names: &["Fang"] },
    Language { alpha2: Some("fo"), alpha3: "fao", bibliographic: None, names: &["Faroese"] },
    Language { alpha2: Some("fa"), alpha3: "fas", bibliographic: Some("per"), names: &["Persian"] },
    Language { alpha2: None, alpha3: "fat", bibliographic: None, names: &["Fanti"] },
    Language { alpha2: Some("fj"), alpha3: "fij", bibliographic: None, names: &["Fijian"] },
    Language { alpha2: None, alpha3: "fil", bibliographic: None, names: &["Filipino", "Pilipino"] },
    Language { alpha2: Some("fi"), alpha3: "fin", bibliographic: None, names: &["Finnish"] },
    Language { alpha2: None, alpha3: "fon", bibliographic: None, names: &["Fon"] },
    Language { alpha2: Some("fr"), alpha3: "fra", bibliographic: Some("fre"), names: &["French"] },
    Language { alpha2: None, alpha3: "frm", bibliographic: None, names: &[] },
    Language { alpha2: None, alpha3: "fro", bibliographic: None, names: &[] },
    Language { alpha2: None, alpha3: "frr", bibliographic: None, names: &["Northern Frisian"] },
    Language { alpha2: None, alpha3: "frs", bibliographic: None, names: &["Eastern Frisian"] },
    Language { alpha2: Some("fy"), alpha3: "fry", bibliographic: None, names: &["Western Frisian"] },
    Language { alpha2: Some("ff"), alpha3: "ful", bibliographic: None, names: &["Fulah"] },
    Language { alpha2: None, alpha3: "fur", bibliographic: None, names: &["Friulian"] },
    Language { alpha2: None, alpha3: "gaa", bibliographic: None, names: &["Ga"] },
    Language { alpha2: None, alpha3: "gay", bibliographic: None, names: &["Gayo"] },
    Language { alpha2: None, alpha3: "gba", bibliographic: None, names: &["Gbaya"] },
    Language { alpha2: None, alpha3: "gez", bibliographic: None, names: &["Geez"] },
    Language { alpha2: None, alpha3: "gil", bibliographic: None, names: &["Gilbertese"] },
    Language { alpha2: Some("gd"), alpha3: "gla", bibliographic: None, names: &["Gaelic", "Scottish Gaelic"] },
    Language { alpha2: Some("ga"), alpha3: "gle", bibliographic: None, names: &["Irish"] },
    Language { alpha2: Some("gl"), alpha3: "glg", bibliographic: None, names: &["Galician"] },
    Language { alpha2: Some("gv"), alpha3: "glv", bibliographic: None, names: &["Manx"] },
    Language { alpha2: None, alpha3: "gmh", bibliographic: None, names: &[] },
    Language { alpha2: None, alpha3: "goh", bibliographic: None, names: &[] },
    Language { alpha2: None, alpha3: "gon", bibliographic: None, names: &["Gondi"] },
    Language { alpha2: None, alpha3: "gor", bibliographic: None, names: &["Gorontalo"] },
    Language { alpha2: None, alpha3: "got", bibliographic: None, names: &["Gothic"] },
    Language { alpha2: None, alpha3: "grb", bibliographic: None, names: &["Grebo"] },
    Language { alpha2: None, alpha3: "grc", bibliographic: None, names: &[] },
    Language { alpha2: Some("gn"), alpha3: "grn", bibliographic: None, names: &["Guarani"] },
    Language { alpha2: None, alpha3: "gsw", bibliographic: None, names: &["Swiss German", "Alemannic", "Alsatian"] },
    Language { alpha2: Some("gu"), alpha3: "guj", bibliographic: None, names: &["Gujarati"] },
    Language { alpha2: None, alpha3: "gwi", bibliographic: None, names: &["Gwich'in"] },
    Language { alpha2: None, alpha3: "hai", bibliographic: None, names: &["Haida"] },
    Language { alpha2: Some("ht"), alpha3: "hat", bibliographic: None, names: &["Haitian", "Haitian Creole"] },
    Language { alpha2: Some("ha"), alpha3: "hau", bibliographic: None, names: &["Hausa"] },
    Language { alpha2: None, alpha3: "haw", bibliographic: None, names: &["Hawaiian"] },
    Language { alpha2: Some("he"), alpha3: "heb", bibliographic: None, names: &["Hebrew"] },
    Language { alpha2: Some("hz"), alpha3: "her", bibliographic: None, names: &["Herero"] },
    Language { alpha2: None, alpha3: "hil", bibliographic: None, names: &["Hiligaynon"] },
    Language { alpha2: Some("hi"), alpha3: "hin", bibliographic: None, names: &["Hindi"] },
    Language { alpha2: None, alpha3: "hit", bibliographic: None, names: &["Hittite"] },
    Language { alpha2: None, alpha3: "hmn", bibliographic: None, names: &["Hmong", "Mong"] },
    Language { alpha2: Some("ho"), alpha3: "hmo", bibliographic: None, names: &["Hiri Motu"] },
    Language { alpha2: Some("hr"), alpha3: "hrv", bibliographic: None, names: &["Croatian"] },
    Language { alpha2: None, alpha3: "hsb", bibliographic: None, names: &["Upper Sorbian"] },
    Language { alpha2: Some("hu"), alpha3: "hun", bibliographic: None, names: &["Hungarian"] },
    Language { alpha2: None, alpha3: "hup", bibliographic: None, names: &["Hupa"] },
    Language { alpha2: Some("hy"), alpha3: "hye", bibliographic: Some("arm"), names: &["Armenian"] },
    Language { alpha2: None, alpha3: "iba", bibliographic: None, names: &["Iban"] },
    Language { alpha2: Some("ig"), alpha3: "ibo", bibliographic: None, names: &["Igbo"] },
    Language { alpha2: Some("io"), alpha3: "ido", bibliographic: None, names: &["Ido"] },
    Language { alpha2: Some("ii"), alpha3: "iii", bibliographic: None, names: &["Sichuan Yi", "Nuosu"] },
    Language { alpha2: Some("iu"), alpha3: "iku", bibliographic: None, names: &["Inuktitut"] },
    Language { alpha2: Some("ie"), alpha3: "ile", bibliographic: None, names: &["Interlingue", "Occidental"] },
    Language { alpha2: None, alpha3: "ilo", bibliographic: None, names: &["Iloko"] },
    Language { alpha2: Some("ia"), alpha3: "ina", bibliographic: None, names: &[] },
    Language { alpha2: Some("id"), alpha3: "ind", bibliographic: None, names: &["Indonesian"] },
    Language { alpha2: None, alpha3: "inh", bibliographic: None, names: &["Ingush"] },
    Language { alpha2: Some("ik"), alpha3: "ipk", bibliographic: None, names: &["Inupiaq"] },
    Language { alpha2: Some("is"), alpha3: "isl", bibliographic: Some("ice"), names: &["Icelandic"] },
    Language { alpha2: Some("it"), alpha3: "ita", bibliographic: None, names: &["Italian"] },
    Language { alpha2: Some("jv"), alpha3: "jav", bibliographic: None, names: &["Javanese"] },
    Language { alpha2: None, alpha3: "jbo", bibliographic: None, names: &["Lojban"] },
    Language { alpha2: Some("ja"), alpha3: "jpn", bibliographic: None, names: &["Japanese"] },
    Language { alpha2: None, alpha3: "jpr", bibliographic: None, names: &["Judeo-Persian"] },
    Language { alpha2: None, alpha3: "jrb", bibliographic: None, names: &["Judeo-Arabic"] },
    Language { alpha2: None, alpha3: "kaa", bibliographic: None, names: &["Kara-Kalpak"] },
    Language { alpha2: None, alpha3: "kab", bibliographic: None, names: &["Kabyle"] },
    Language { alpha2: None, alpha3: "kac", bibliographic: None, names: &["Kachin", "Jingpho"] },
    Language { alpha2: Some("kl"), alpha3: "kal", bibliographic: None, names: &["Kalaallisut", "Greenlandic"] },
    Language { alpha2: None, alpha3: "kam", bibliographic: None, names: &["Kamba"] },
    Language { alpha2: Some("kn"), alpha3: "kan", bibliographic: None, names: &["Kannada"] },
    Language { alpha2: Some("ks"), alpha3: "kas", bibliographic: None, names: &["Kashmiri"] },
    Language { alpha2: Some("ka"), alpha3: "kat", bibliographic: Some("geo"), names: &["Georgian"] },
    Language { alpha2: Some("kr"), alpha3: "kau", bibliographic: None, names: &["Kanuri"] },
    Language { alpha2: None, alpha3: "kaw", bibliographic: None, names: &["Kawi"] },
    Language { alpha2: Some("kk"), alpha3: "kaz", bibliographic: None, names: &["Kazakh"] },
    Language { alpha2: None, alpha3: "kbd", bibliographic: None, names: &["Kabardian"] },
    Language { alpha2: None, alpha3: "kha", bibliographic: None, names: &["Khasi"] },
    Language { alpha2: Some("km"), alpha3: "khm", bibliographic: None, names: &["Central Khmer"] },
    Language { alpha2: None, alpha3: "kho", bibliographic: None, names: &["Khotanese", "Sakan"] },
    Language { alpha2: Some("ki"), alpha3: "kik", bibliographic: None, names: &["Kikuyu", "Gikuyu"] },
    Language { alpha2: Some("rw"), alpha3: "kin", bibliographic: None, names: &["Kinyarwanda"] },
    Language { alpha2: Some("ky"), alpha3: "kir", bibliographic: None, names: &["Kirghiz", "Kyrgyz"] },
    Language { alpha2: None, alpha3: "kmb", bibliographic: None, names: &["Kimbundu"] },
    Language { alpha2: None, alpha3: "kok", bibliographic: None, names: &["Konkani"] },
    Language { alpha2: Some("kv"), alpha3: "kom", bibliographic: None, names: &["Komi"] },
    Language { alpha2: Some("kg"), alpha3: "kon", bibliographic: None, names: &["Kongo"] },
    Language { alpha2: Some("ko"), alpha3: "kor", bibliographic: None, names: &["Korean"] },
    Language { alpha2: None, alpha3: "kos", bibliographic: None, names: &["Kosraean"] },
    Language { alpha2: None, alpha3: "kpe", bibliographic: None, names: &["Kpelle"] },
    Language { alpha2: None, alpha3: "krc", bibliographic: None, names: &["Karachay-Balkar"] },
    Language { alpha2: None, alpha3: "krl", bibliographic: None, names: &["Karelian"] },
    Language { alpha2: None, alpha3: "kru", bibliographic: None, names: &["Kurukh"] },
    Language { alpha2: Some("kj"), alpha3: "kua", bibliographic: None, names: &["Kuanyama", "Kwanyama"] },
    Language { alpha2: None, alpha3: "kum", bibliographic: None, names: &["Kumyk"] },
    Language { alpha2: Some("ku"), alpha3: "kur", bibliographic: None, names: &["Kurdish"] },
    Language { alpha2: None, alpha3: "kut", bibliographic: None, names: &["Kutenai"] },
    Language { alpha2: None, alpha3: "lad", bibliographic: None, names: &["Ladino"] },
    Language { alpha2: None, alpha3: "lah", bibliographic: None, names: &["Lahnda"] },
    Language { alpha2: None, alpha3: "lam", bibliographic: None, names: &["Lamba"] },
    Language { alpha2: Some("lo"), alpha3: "lao", bibliographic: None, names: &["Lao"] },
    Language { alpha2: Some("la"), alpha3: "lat", bibliographic: None, names: &["Latin"] },
    Language { alpha2: Some("lv"), alpha3: "lav", bibliographic: None, names: &["Latvian"] },
    Language { alpha2: None, alpha3: "lez", bibliographic: None, names: &["Lezghian"] },
    Language { alpha2: Some("li"), alpha3: "lim", bibliographic: None, names: &["Limburgan", "Limburger", "Limburgish"] },
    Language { alpha2: Some("ln"), alpha3: "lin", bibliographic: None, names: &["Lingala"] },
    Language { alpha2: Some("lt"), alpha3: "lit", bibliographic: None, names: &["Lithuanian"] },
    Language { alpha2: None, alpha3: "lol", bibliographic: None, names: &["Mongo"] },
    Language { alpha2: None, alpha3: "loz", bibliographic: None, names: &["Lozi"] },
    Language { alpha2: Some("lb"), alpha3: "ltz", bibliographic: None, names: &["Luxembourgish", "Letzeburgesch"] },
    Language { alpha2: None, alpha3: "lua", bibliographic: None, names: &["Luba-Lulua"] },
    Language { alpha2: Some("lu"), alpha3: "lub", bibliographic: None, names: &["Luba-Katanga"] },
    Language { alpha2: Some("lg"), alpha3: "lug", bibliographic: None, names: &["Ganda"] },
    Language { alpha2: None, alpha3: "lui", bibliographic: None, names: &["Luiseno"] },
    Language { alpha2: None, alpha3: "lun", bibliographic: None, names: &["Lunda"] },
    Language { alpha2: None, alpha3: "luo", bibliographic: None, names: &[] },
    Language { alpha2: None, alpha3: "lus", bibliographic: None, names: &["Lushai"] },
    Language { alpha2: None, alpha3: "mad", bibliographic: None, names: &["Madurese"] },
    Language { alpha2: None, alpha3: "mag", bibliographic: None, names: &["Magahi"] },
    Language { alpha2: Some("mh"), alpha3: "mah", bibliographic: None, names: &["Marshallese"] },
    Language { alpha2: None, alpha3: "mai", bibliographic: None, names: &["Maithili"] },
    Language { alpha2: None, alpha3: "mak", bibliographic: None, names: &["Makasar"] },
    Language { alpha2: Some("ml"), alpha3: "mal", bibliographic: None, names: &["Malayalam"] },
    Language { alpha2: None, alpha3: "man", bibliographic: None, names: &["Mandingo"] },
    Language { alpha2: Some("mr"), alpha3: "mar", bibliographic: None, names: &["Marathi"] },
    Language { alpha2: None, alpha3: "mas", bibliographic: None, names: &["Masai"] },
    Language { alpha2: None, alpha3: "mdf", bibliographic: None, names: &["Moksha"] },
    Language { alpha2: None, alpha3: "mdr", bibliographic: None, names: &["Mandar"] },
    Language { alpha2: None, alpha3: "men", bibliographic: None, names: &["Mende"] },
    Language { alpha2: None, alpha3: "mga", bibliographic: None, names: &[] },
    Language { alpha2: None, alpha3: "mic", bibliographic: None, names: &["Mi'kmaq", "Micmac"] },
    Language { alpha2: None, alpha3: "min", bibliographic: None, names: &["Minangkabau"] },
    Language { alpha2: Some("mk"), alpha3: "mkd", bibliographic: Some("mac"), names: &["Macedonian"] },
    Language { alpha2: Some("mg"), alpha3: "mlg", bibliographic: None, names: &["Malagasy"] },
    Language { alpha2: Some("mt"), alpha3: "mlt", bibliographic: None, names: &["Maltese"] },
    Language { alpha2: None, alpha3: "mnc", bibliographic: None, names: &["Manchu"] },
    Language { alpha2: None, alpha3: "mni", bibliographic: None, names: &["Manipuri"] },
    Language { alpha2: None, alpha3: "moh", bibliographic: None, names: &["Mohawk"] },
    Language { alpha2: Some("mn"), alpha3: "mon", bibliographic: None, names: &["Mongolian"] },
    Language { alpha2: None, alpha3: "mos", bibliographic: None, names: &["Mossi"] },
    Language { alpha2: Some("mi"), alpha3: "mri", bibliographic: Some("mao"), names: &["Maori"] },
    Language { alpha2: Some("ms"), alpha3: "msa", bibliographic: Some("may"), names: &["Malay"] },
    Language { alpha2: None, alpha3: "mus", bibliographic: None, names: &["Creek"] },
    Language { alpha2: None, alpha3: "mwl", bibliographic: None, names: &["Mirandese"] },
    Language { alpha2: None, alpha3: "mwr", bibliographic: None, names: &["Marwari"] },
    Language { alpha2: Some("my"), alpha3: "mya", bibliographic: Some("bur"), names: &["Burmese"] },
    Language { alpha2: None, alpha3: "myv", bibliographic: None, names: &["Erzya"] },
    Language { alpha2: None, alpha3: "nap", bibliographic: None, names: &["Neapolitan"] },
    Language { alpha2: Some("na"), alpha3: "nau", bibliographic: None, names: &["Nauru"] },
    Language { alpha2: Some("nv"), alpha3: "nav", bibliographic: None, names: &["Navajo", "Navaho"] },
    Language { alpha2: Some("nr"), alpha3: "nbl", bibliographic: None, names: &["South Ndebele"] },
    Language { alpha2: Some("nd"), alpha3: "nde", bibliographic: None, names: &["North Ndebele"] },
    Language { alpha2: Some("ng"), alpha3: "ndo", bibliographic: None, names: &["Ndonga"] },
    Language { alpha2: None, alpha3: "nds", bibliographic: None, names: &["Low German", "Low Saxon"] },
    Language { alpha2: Some("ne"), alpha3: "nep", bibliographic: None, names: &["Nepali"] },
    Language { alpha2: None, alpha3: "new", bibliographic: None, names: &["Nepal Bhasa", "Newari"] },
    Language { alpha2: None, alpha3: "nia", bibliographic: None, names: &["Nias"] },
    Language { alpha2: None, alpha3: "niu", bibliographic: None, names: &["Niuean"] },
    Language { alpha2: Some("nl"), alpha3: "nld", bibliographic: Some("dut"), names: &["Dutch", "Flemish"] },
    Language { alpha2: Some("nn"), alpha3: "nno", bibliographic: None, names: &["Norwegian Nynorsk"] },
    Language { alpha2: Some("nb"), alpha3: "nob", bibliographic: None, names: &["Norwegian Bokmål"] },
    Language { alpha2: None, alpha3: "nog", bibliographic: None, names: &["Nogai"] },
    Language { alpha2: None, alpha3: "non", bibliographic: None, names: &[] },
    Language { alpha2: Some("no"), alpha3: "nor", bibliographic: None, names: &["Norwegian"] },
    Language { alpha2: None, alpha3: "nqo", bibliographic: None, names: &["N'Ko"] },
    Language { alpha2: None, alpha3: "nso", bibliographic: None, names: &["Pedi", "Sepedi", "Northern Sotho"] },
    Language { alpha2: None, alpha3: "nwc", bibliographic: None, names: &["Classical Newari", "Old Newari", "Classical Nepal Bhasa"] },
    Language { alpha2: Some("ny"), alpha3: "nya", bibliographic: None, names: &["Chichewa", "Chewa", "Nyanja"] },
    Language { alpha2: None, alpha3: "nym", bibliographic: None, names: &["Nyamwezi"] },
    Language { alpha2: None, alpha3: "nyn", bibliographic: None, names: &["Nyankole"] },
    Language { alpha2: None, alpha3: "nyo", bibliographic: None, names: &["Nyoro"] },
    Language { alpha2: None, alpha3: "nzi", bibliographic: None, names: &["Nzima"] },
    Language { alpha2: Some("oc"), alpha3: "oci", bibliographic: None, names: &["Provençal"] },
    Language { alpha2: Some("oj"), alpha3: "oji", bibliographic: None, names: &["Ojibwa"] },
    Language { alpha2: Some("or"), alpha3: "ori", bibliographic: None, names: &["Oriya"] },
    Language { alpha2: Some("om"), alpha3: "orm", bibliographic: None, names: &["Oromo"] },
    Language { alpha2: None, alpha3: "osa", bibliographic: None, names: &["Osage"] },
    Language { alpha2: Some("os"), alpha3: "oss", bibliographic: None, names: &["Ossetian", "Ossetic"] },
    Language { alpha2: None, alpha3: "ota", bibliographic: None, names: &[] },
    Language { alpha2: None, alpha3: "pag", bibliographic: None, names: &["Pangasinan"] },
    Language { alpha2: None, alpha3: "pal", bibliographic: None, names: &["Pahlavi"] },
    Language { alpha2: None, alpha3: "pam", bibliographic: None, names: &["Pampanga", "Kapampangan"] },
    Language { alpha2: Some("pa"), alpha3: "pan", bibliographic: None, names: &["Panjabi", "Punjabi"] },
    Language { alpha2: None, alpha3: "pap", bibliographic: None, names: &["Papiamento"] },
    Language { alpha2: None, alpha3: "pau", bibliographic: None, names: &["Palauan"] },
    Language { alpha2: None, alpha3: "peo", bibliographic: None, names: &[] },
    Language { alpha2: None, alpha3: "phn", bibliographic: None, names: &["Phoenician"] },
    Language { alpha2: Some("pi"), alpha3: "pli", bibliographic: None, names: &["Pali"] },
    Language { alpha2: Some("pl"), alpha3: "pol", bibliographic: None, names: &["Polish"] },
    Language { alpha2: None, alpha3: "pon", bibliographic: None, names: &["Pohnpeian"] },
    Language { alpha2: Some("pt"), alpha3: "por", bibliographic: None, names: &["Portuguese"] },
    Language { alpha2: None, alpha3: "pro", bibliographic: None, names: &[] },
    Language { alpha2: Some("ps"), alpha3: "pus", bibliographic: None, names: &["Pushto", "Pashto"] },
    Language { alpha2: Some("qu"), alpha3: "que", bibliographic: None, names: &["Quechua"] },
    Language { alpha2: None, alpha3: "raj", bibliographic: None, names: &["Rajasthani"] },
    Language { alpha2: None, alpha3: "rap", bibliographic: None, names: &["Rapanui"] },
    Language { alpha2: None, alpha3: "rar", bibliographic: None, names: &["Rarotongan", "Cook Islands Maori"] },
    Language { alpha2: Some("rm"), alpha3: "roh", bibliographic: None, names: &["Romansh"] },
    Language { alpha2: None, alpha3: "rom", bibliographic: None, names: &["Romany"] },
    Language { alpha2: Some("ro"), alpha3: "ron", bibliographic: Some("rum"), names: &["Romanian", "Moldavian", "Moldovan"] },
    Language { alpha2: Some("rn"), alpha3: "run", bibliographic: None, names: &["Rundi"] },
    Language { alpha2: None, alpha3: "rup", bibliographic: None, names: &["Aromanian", "Arumanian", "Macedo-Romanian"] },
    Language { alpha2: Some("ru"), alpha3: "rus", bibliographic: None, names: &["Russian"] },
    Language { alpha2: None, alpha3: "sad", bibliographic: None, names: &["Sandawe"] },
    Language { alpha2: Some("sg"), alpha3: "sag", bibliographic: None, names: &["Sango"] },
    Language { alpha2: None, alpha3: "sah", bibliographic: None, names: &["Yakut"] },
    Language { alpha2: None, alpha3: "sai", bibliographic: None, names: &[] },
    Language { alpha2: None, alpha3: "sam", bibliographic: None, names: &["Samaritan Aramaic"] },
    Language { alpha2: Some("sa"), alpha3: "san", bibliographic: None, names: &["Sanskrit"] },
    Language { alpha2: None, alpha3: "sas", bibliographic: None, names: &["Sasak"] },
    Language { alpha2: None, alpha3: "sat", bibliographic: None, names: &["Santali"] },
    Language { alpha2: None, alpha3: "scn", bibliographic: None, names: &["Sicilian"] },
    Language { alpha2: None, alpha3: "sco", bibliographic: None, names: &["Scots"] },
    Language { alpha2: None, alpha3: "sel", bibliographic: None, names: &["Selkup"] },
    Language { alpha2: None, alpha3: "sga", bibliographic: None, names: &[] },
    Language { alpha2: None, alpha3: "shn", bibliographic: None, names: &["Shan"] },
    Language { alpha2: None, alpha3: "sid", bibliographic: None, names: &["Sidamo"] },
    Language { alpha2: Some("si"), alpha3: "sin", bibliographic: None, names: &["Sinhala", "Sinhalese"] },
    Language { alpha2: Some("sk"), alpha3: "slk", bibliographic: Some("slo"), names: &["Slovak"] },
    Language { alpha2: Some("sl"), alpha3: "slv", bibliographic: None, names: &["Slovenian"] },
    Language { alpha2: None, alpha3: "sma", bibliographic: None, names: &["Southern Sami"] },
    Language { alpha2: Some("se"), alpha3: "sme", bibliographic: None, names: &["Northern Sami"] },
    Language { alpha2: None, alpha3: "smj", bibliographic: None, names: &["Lule Sami"] },
    Language { alpha2: None, alpha3: "smn", bibliographic: None, names: &["Inari Sami"] },
    Language { alpha2: Some("sm"), alpha3: "smo", bibliographic: None, names: &["Samoan"] },
    Language { alpha2: None, alpha3: "sms", bibliographic: None, names: &["Skolt Sami"] },
    Language { alpha2: Some("sn"), alpha3: "sna", bibliographic: None, names: &["Shona"] },
    Language { alpha2: Some("sd"), alpha3: "snd", bibliographic: None, names: &["Sindhi"] },
    Language { alpha2: None, alpha3: "snk", bibliographic: None, names: &["Soninke"] },
    Language { alpha2: None, alpha3: "sog", bibliographic: None, names: &["Sogdian"] },
    Language { alpha2: Some("so"), alpha3: "som", bibliographic: None, names: &["Somali"] },
    Language { alpha2: Some("st"), alpha3: "sot", bibliographic: None, names: &[] },
    Language { alpha2: Some("es"), alpha3: "spa", bibliographic: None, names: &["Spanish", "Castilian"] },
    Language { alpha2: Some("sq"), alpha3: "sqi", bibliographic: Some("alb"), names: &["Albanian"] },
    Language { alpha2: Some("sc"), alpha3: "srd", bibliographic: None, names: &["Sardinian"] },
    Language { alpha2: None, alpha3: "srn", bibliographic: None, names: &["Sranan Tongo"] },
    Language { alpha2: Some("sr"), alpha3: "srp", bibliographic: None, names: &["Serbian"] },
    Language { alpha2: None, alpha3: "srr", bibliographic: None, names: &["Serer"] },
    Language { alpha2: Some("ss"), alpha3: "ssw", bibliographic: None, names: &["Swati"] },
    Language { alpha2: None, alpha3: "suk", bibliographic: None, names: &["Sukuma"] },
    Language { alpha2: Some("su"), alpha3: "sun", bibliographic: None, names: &["Sundanese"] },
    Language { alpha2: None, alpha3: "sus", bibliographic: None, names: &["Susu"] },
    Language { alpha2: None, alpha3: "sux", bibliographic: None, names: &["Sumerian"] },
    Language { alpha2: Some("sw"), alpha3: "swa", bibliographic: None, names: &["Swahili"] },
    Language { alpha2: Some("sv"), alpha3: "swe", bibliographic: None, names: &["Swedish"] },
    Language { alpha2: None, alpha3: "syc", bibliographic: None, names: &["Classical Syriac"] },
    Language { alpha2: None, alpha3: "syr", bibliographic: None, names: &["Syriac"] },
    Language { alpha2: Some("ty"), alpha3: "tah", bibliographic: None, names: &["Tahitian"] },
    Language { alpha2: Some("ta"), alpha3: "tam", bibliographic: None, names: &["Tamil"] },
    Language { alpha2: Some("tt"), alpha3: "tat", bibliographic: None, names: &["Tatar"] },
    Language { alpha2: Some("te"), alpha3: "tel", bibliographic: None, names: &["Telugu"] },
    Language { alpha2: None, alpha3: "tem", bibliographic: None, names: &["Timne"] },
    Language { alpha2: None, alpha3: "ter", bibliographic: None, names: &["Tereno"] },
    Language { alpha2: None, alpha3: "tet", bibliographic: None, names: &["Tetum"] },
    Language { alpha2: Some("tg"), alpha3: "tgk", bibliographic: None, names: &["Tajik"] },
    Language { alpha2: Some("tl"), alpha3: "tgl", bibliographic: None, names: &["Tagalog"] },
    Language { alpha2: Some("th"), alpha3: "tha", bibliographic: None, names: &["Thai"] },
    Language { alpha2: None, alpha3: "tig", bibliographic: None, names: &["Tigre"] },
    Language { alpha2: Some("ti"), alpha3: "tir", bibliographic: None, names: &["Tigrinya"] },
    Language { alpha2: None, alpha3: "tiv", bibliographic: None, names: &["Tiv"] },
    Language { alpha2: None, alpha3: "tkl", bibliographic: None, names: &["Tokelau"] },
    Language { alpha2: None, alpha3: "tlh", bibliographic: None, names: &["Klingon", "tlhIngan-Hol"] },
    Language { alpha2: None, alpha3: "tli", bibliographic: None, names: &["Tlingit"] },
    Language { alpha2: None, alpha3: "tmh", bibliographic: None, names: &["Tamashek"] },
    Language { alpha2: None, alpha3: "tog", bibliographic: None, names: &[] },
    Language { alpha2: Some("to"), alpha3: "ton", bibliographic: None, names: &[] },
    Language { alpha2: None, alpha3: "tpi", bibliographic: None, names: &["Tok Pisin"] },
    Language { alpha2: None, alpha3: "tsi", bibliographic: None, names: &["Tsimshian"] },
    Language { alpha2: Some("tn"), alpha3: "tsn", bibliographic: None, names: &["Tswana"] },
    Language { alpha2: Some("ts"), alpha3: "tso", bibliographic: None, names: &["Tsonga"] },
    Language { alpha2: Some("tk"), alpha3: "tuk", bibliographic: None, names: &["Turkmen"] },
    Language { alpha2: None, alpha3: "tum", bibliographic: None, names: &["Tumbuka"] },
    Language { alpha2: Some("tr"), alpha3: "tur", bibliographic: None, names: &["Turkish"] },
    Language { alpha2: None, alpha3: "tvl", bibliographic: None, names: &["Tuvalu"] },
    Language { alpha2: Some("tw"), alpha3: "twi", bibliographic: None, names: &["Twi"] },
    Language { alpha2: None, alpha3: "tyv", bibliographic: None, names: &["Tuvinian"] },
    Language { alpha2: None, alpha3: "udm", bibliographic: None, names: &["Udmurt"] },
    Language { alpha2: None, alpha3: "uga", bibliographic: None, names: &["Ugaritic"] },
    Language { alpha2: Some("ug"), alpha3: "uig", bibliographic: None, names: &["Uighur", "Uyghur"] },
    Language { alpha2: Some("uk"), alpha3: "ukr", bibliographic: None, names: &["Ukrainian"] },
    Language { alpha2: None, alpha3: "umb", bibliographic: None, names: &["Umbundu"] },
    Language { alpha2: Some("ur"), alpha3: "urd", bibliographic: None, names: &["Urdu"] },
    Language { alpha2: Some("uz"), alpha3: "uzb", bibliographic: None, names: &["Uzbek"] },
    Language { alpha2: None, alpha3: "vai", bibliographic: None, names: &["Vai"] },
    Language { alpha2: Some("ve"), alpha3: "ven", bibliographic: None, names: &["Venda"] },
    Language { alpha2: Some("vi"), alpha3: "vie", bibliographic: None, names: &["Vietnamese"] },
    Language { alpha2: Some("vo"), alpha3: "vol", bibliographic: None, names: &["Volapük"] },
    Language { alpha2: None, alpha3: "vot", bibliographic: None, names: &["Votic"] },
    Language { alpha2: None, alpha3: "wal", bibliographic: None, names: &["Walamo"] },
    Language { alpha2: None, alpha3: "war", bibliographic: None, names: &["Waray"] },
    Language { alpha2: None, alpha3: "was", bibliographic: None, names: &["Washo"] },
    Language { alpha2: Some("wa"), alpha3: "wln", bibliographic: None, names: &["Walloon"] },
    Language { alpha2: Some("wo"), alpha3: "wol", bibliographic: None, names: &["Wolof"] },
    Language { alpha2: None, alpha3: "xal", bibliographic: None, names: &["Kalmyk", "Oirat"] },
    Language { alpha2: Some("xh"), alpha3: "xho", bibliographic: None, names: &["Xhosa"] },
    Language { alpha2: None, alpha3: "yao", bibliographic: None, names: &["Yao"] },
    Language { alpha2: None, alpha3: "yap", bibliographic: None, names: &["Yapese"] },
    Language { alpha2: Some("yi"), alpha3: "yid", bibliographic: None, names: &["Yiddish"] },
    Language { alpha2: Some("yo"), alpha3: "yor", bibliographic: None, names: &["Yoruba"] },
    Language { alpha2: None, alpha3: "zap", bibliographic: None, names: &["Zapotec"] },
    Language { alpha2: None, alpha3: "zbl", bibliographic: None, names: &["Blissymbols", "Blissymbolics", "Bliss"] },
    Language { alpha2: None, alpha3: "zen", bibliographic: None, names: &["Zenaga"] },
    Language { alpha2: None, alpha3: "zgh", bibliographic: None, names: &["Standard Moroccan Tamazight"] },
    Language { alpha2: Some("za"), alpha3: "zha", bibliographic: None, names: &["Zhuang", "Chuang"] },
    Language { alpha2: Some("zh"), alpha3: "zho", bibliographic: Some("chi"), names: &["Chinese"] },
    Language { alpha2: Some("zu"), alpha3: "zul", bibliographic: None, names: &["Zulu"] },
    Language { alpha2: None, alpha3: "zun", bibliographic: None, names: &["Zuni"] },
    Language { alpha2: None, alpha3: "zza", bibliographic: None, names: &["Zaza", "Dimili", "Dimli", "Kirdki", "Kirmanjki", "Zazaki"] },
];
