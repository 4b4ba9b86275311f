//! Locale resolution for long-form dates.
//!
//! Month names come from chrono's bundled locale data; the order of day,
//! month and year comes from a small pattern table keyed by locale or language.

use chrono::Locale;

/// Region assumed for a bare language code when `ll_LL` is not a known locale
/// (`el` has no `el_EL`) or names the wrong variant (`pt` means Brazil).
#[rustfmt::skip]
const DEFAULT_REGIONS: &[(&str, &str)] = &[
    ("aa", "aa_DJ"), ("af", "af_ZA"), ("ak", "ak_GH"), ("am", "am_ET"), ("an", "an_ES"),
    ("ar", "ar_EG"), ("as", "as_IN"), ("be", "be_BY"), ("bi", "bi_VU"), ("bn", "bn_BD"),
    ("bo", "bo_CN"), ("br", "br_FR"), ("bs", "bs_BA"), ("ca", "ca_ES"), ("ce", "ce_RU"),
    ("cs", "cs_CZ"), ("cv", "cv_RU"), ("cy", "cy_GB"), ("da", "da_DK"), ("dv", "dv_MV"),
    ("dz", "dz_BT"), ("el", "el_GR"), ("en", "en_US"), ("et", "et_EE"), ("eu", "eu_ES"),
    ("fa", "fa_IR"), ("ff", "ff_SN"), ("fy", "fy_NL"), ("ga", "ga_IE"), ("gd", "gd_GB"),
    ("gl", "gl_ES"), ("gu", "gu_IN"), ("gv", "gv_GB"), ("ha", "ha_NG"), ("he", "he_IL"),
    ("hi", "hi_IN"), ("hy", "hy_AM"), ("ia", "ia_FR"), ("ig", "ig_NG"), ("ik", "ik_CA"),
    ("iu", "iu_CA"), ("ja", "ja_JP"), ("ka", "ka_GE"), ("kk", "kk_KZ"), ("kl", "kl_GL"),
    ("km", "km_KH"), ("kn", "kn_IN"), ("ko", "ko_KR"), ("ks", "ks_IN"), ("ku", "ku_TR"),
    ("kw", "kw_GB"), ("ky", "ky_KG"), ("lb", "lb_LU"), ("lg", "lg_UG"), ("li", "li_NL"),
    ("ln", "ln_CD"), ("lo", "lo_LA"), ("mi", "mi_NZ"), ("ml", "ml_IN"), ("mr", "mr_IN"),
    ("ms", "ms_MY"), ("my", "my_MM"), ("nb", "nb_NO"), ("ne", "ne_NP"), ("nn", "nn_NO"),
    ("nr", "nr_ZA"), ("oc", "oc_FR"), ("om", "om_ET"), ("or", "or_IN"), ("os", "os_RU"),
    ("pa", "pa_IN"), ("ps", "ps_AF"), ("pt", "pt_BR"), ("sa", "sa_IN"), ("sc", "sc_IT"),
    ("sd", "sd_IN"), ("se", "se_NO"), ("si", "si_LK"), ("sl", "sl_SI"), ("sm", "sm_WS"),
    ("sq", "sq_AL"), ("sr", "sr_RS"), ("ss", "ss_ZA"), ("st", "st_ZA"), ("sv", "sv_SE"),
    ("sw", "sw_TZ"), ("ta", "ta_IN"), ("te", "te_IN"), ("tg", "tg_TJ"), ("ti", "ti_ET"),
    ("tk", "tk_TM"), ("tl", "tl_PH"), ("tn", "tn_ZA"), ("ts", "ts_ZA"), ("tt", "tt_RU"),
    ("ug", "ug_CN"), ("uk", "uk_UA"), ("ur", "ur_PK"), ("ve", "ve_ZA"), ("vi", "vi_VN"),
    ("wa", "wa_BE"), ("wo", "wo_SN"), ("xh", "xh_ZA"), ("yi", "yi_US"), ("yo", "yo_NG"),
    ("zh", "zh_CN"), ("zu", "zu_ZA"),
];

/// `strftime` patterns for the long date, keyed by full locale first, then language.
const LONG_PATTERNS: &[(&str, &str)] = &[
    ("en_AU", "%-d %B %Y"),
    ("en_GB", "%-d %B %Y"),
    ("en_IE", "%-d %B %Y"),
    ("en_IN", "%-d %B %Y"),
    ("en_NZ", "%-d %B %Y"),
    ("de", "%-d. %B %Y"),
    ("en", "%B %-d, %Y"),
    ("es", "%-d de %B de %Y"),
    ("fi", "%-d. %B %Y"),
    ("hu", "%Y. %B %-d."),
    ("ja", "%Y年%-m月%-d日"),
    ("ko", "%Y년 %-m월 %-d일"),
    ("nb", "%-d. %B %Y"),
    ("pt", "%-d de %B de %Y"),
    ("zh", "%Y年%-m月%-d日"),
];

/// Day-month-year order, used for languages without an entry above.
const DEFAULT_PATTERN: &str = "%-d %B %Y";

/// A resolved locale: chrono's locale data plus the long-date pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateLocale {
    locale: Locale,
    long_pattern: &'static str,
}

impl DateLocale {
    /// US English, the fallback for codes that cannot be resolved.
    #[must_use]
    pub fn english() -> Self {
        Self { locale: Locale::en_US, long_pattern: "%B %-d, %Y" }
    }

    /// Resolves a code such as `en`, `fr`, `pt_BR` or `de-AT`.
    ///
    /// Unknown codes resolve to [`DateLocale::english`].
    #[must_use]
    pub fn resolve(code: &str) -> Self {
        let (language, normalized) = normalize(code);
        let locale = Locale::try_from(normalized.as_str())
            .ok()
            .or_else(|| {
                lookup(DEFAULT_REGIONS, &language).and_then(|name| Locale::try_from(name).ok())
            })
            .or_else(|| {
                let doubled = format!("{language}_{}", language.to_ascii_uppercase());
                Locale::try_from(doubled.as_str()).ok()
            });

        let Some(locale) = locale else {
            tracing::debug!(code, "unknown locale, falling back to English");
            return Self::english();
        };
        let long_pattern = lookup(LONG_PATTERNS, &locale.to_string())
            .or_else(|| lookup(LONG_PATTERNS, &language))
            .unwrap_or(DEFAULT_PATTERN);
        Self { locale, long_pattern }
    }

    /// chrono locale used for month names.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// `strftime` pattern for the long date.
    #[must_use]
    pub fn long_pattern(&self) -> &'static str {
        self.long_pattern
    }
}

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Splits `code` into its lowercase language and a `ll_RR` form.
fn normalize(code: &str) -> (String, String) {
    let mut parts = code.trim().split(['-', '_']);
    let language = parts.next().unwrap_or_default().to_ascii_lowercase();
    let normalized = match parts.next() {
        Some(region) if region.len() == 2 => {
            format!("{language}_{}", region.to_ascii_uppercase())
        }
        Some(other) if !other.is_empty() => format!("{language}_{other}"),
        _ => language.clone(),
    };
    (language, normalized)
}
