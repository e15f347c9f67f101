//! Built-in currency definitions.
//!
//! Mechanical data table: one entry per supported currency, covering the
//! zero-decimal, three-decimal, and four-decimal classes alongside the
//! common two-decimal ones. Loaded into the default catalog on first use.

use super::{Currency, Format, MinorUnit};
use crate::format::NegativePosition::*;
use crate::format::PositivePosition::*;

use crate::format::{NegativePosition, PositivePosition};

fn fmt(
    decimal: &str,
    group: &str,
    positive: PositivePosition,
    negative: NegativePosition,
) -> Format {
    Format::new(decimal, group, positive, negative)
}

fn minor(name: &str, per_major: u32, smallest_denomination: u32) -> MinorUnit {
    MinorUnit::new(name, per_major, smallest_denomination)
}

fn cur(
    code: &str,
    numeric: u16,
    name: &str,
    format: Format,
    minor_unit: MinorUnit,
    symbols: &[&str],
) -> Currency {
    Currency::new(code, Some(numeric), name, format, minor_unit, symbols)
}

#[rustfmt::skip]
pub(crate) fn builtin() -> Vec<Currency> {
    vec![
        cur("AED", 784, "United Arab Emirates Dirham", fmt(".", ",", AfterWithSpace, Eight), minor("Fils", 100, 25), &["د.إ.‏", "DH", "Dhs"]),
        cur("AFN", 971, "Afghan Afghani", fmt(".", ",", AfterWithSpace, Eight), minor("Pul", 100, 100), &["؋", "Af", "Afs"]),
        cur("ALL", 8, "Albanian Lek", fmt(".", ",", AfterWithSpace, Eight), minor("Qintar", 100, 100), &["Lekë", "Lek"]),
        cur("AMD", 51, "Armenian Dram", fmt(".", ",", AfterWithSpace, Eight), minor("Luma", 100, 10), &["֏", "dram"]),
        cur("ANG", 532, "Netherlands Antillean Gulden", fmt(",", ".", BeforeWithSpace, Nine), minor("Cent", 100, 1), &["ƒ", "NAƒ", "NAf", "f"]),
        cur("AOA", 973, "Angolan Kwanza", fmt(".", ",", AfterWithSpace, Eight), minor("Cêntimo", 100, 10), &["Kz"]),
        cur("ARS", 32, "Argentine Peso", fmt(",", ".", Before, One), minor("Centavo", 100, 1), &["$", "$m/n", "m$n"])
            .with_disambiguation_symbol("$m/n"),
        cur("AUD", 36, "Australian Dollar", fmt(".", ",", Before, One), minor("Cent", 100, 5), &["$", "A$"])
            .with_disambiguation_symbol("A$")
            .with_priority(4),
        cur("AWG", 533, "Aruban Florin", fmt(".", ",", AfterWithSpace, Eight), minor("Cent", 100, 5), &["ƒ", "Afl"]),
        cur("AZN", 944, "Azerbaijani Manat", fmt(".", ",", Before, One), minor("Qəpik", 100, 1), &["₼", "m", "man"]),
        cur("BAM", 977, "Bosnia-Herzegovina Convertible Mark", fmt(".", ",", AfterWithSpace, Eight), minor("Fening", 100, 5), &["КМ", "KM"]),
        cur("BBD", 52, "Barbadian Dollar", fmt(".", ",", Before, One), minor("Cent", 100, 1), &["$", "Bds$"])
            .with_disambiguation_symbol("Bds$"),
        cur("BDT", 50, "Bangladeshi Taka", fmt(".", ",", Before, One), minor("Paisa", 100, 1), &["৳", "Tk"]),
        cur("BGN", 975, "Bulgarian Lev", fmt(".", ",", AfterWithSpace, Eight), minor("Stotinka", 100, 1), &["лв.", "lev", "leva", "лев", "лева"]),
        cur("BHD", 48, "Bahraini Dinar", fmt(".", ",", Before, One), minor("Fils", 1000, 5), &["د.ب", "BD"]),
        cur("BIF", 108, "Burundian Franc", fmt(".", ",", AfterWithSpace, Eight), minor("Centime", 1, 100), &["Fr", "FBu"]),
        cur("BMD", 60, "Bermudian Dollar", fmt(".", ",", Before, One), minor("Cent", 100, 1), &["$", "BD$"]),
        cur("BND", 96, "Brunei Dollar", fmt(".", ",", Before, One), minor("Sen", 100, 1), &["$", "B$", "BND"])
            .with_disambiguation_symbol("BND"),
        cur("BOB", 68, "Bolivian Boliviano", fmt(".", ",", Before, One), minor("Centavo", 100, 10), &["Bs.", "Bs"]),
        cur("BRL", 986, "Brazilian Real", fmt(",", ".", Before, One), minor("Centavo", 100, 5), &["R$"]),
        cur("BSD", 44, "Bahamian Dollar", fmt(".", ",", Before, One), minor("Cent", 100, 1), &["$", "B$"])
            .with_disambiguation_symbol("BSD"),
        cur("BTN", 64, "Bhutanese Ngultrum", fmt(".", ",", AfterWithSpace, Eight), minor("Chertrum", 100, 5), &["Nu.", "Nu"]),
        cur("BWP", 72, "Botswana Pula", fmt(".", ",", Before, One), minor("Thebe", 100, 5), &["P"]),
        cur("BYN", 933, "Belarusian Ruble", fmt(",", " ", AfterWithSpace, Eight), minor("Kapeyka", 100, 1), &["Br", "бел. руб.", "б.р.", "руб.", "р."])
            .with_disambiguation_symbol("BYN"),
        cur("BYR", 974, "Belarusian Ruble", fmt(",", " ", AfterWithSpace, Eight), MinorUnit::unnamed(1, 100), &["Br", "бел. руб.", "б.р.", "руб.", "р."])
            .with_disambiguation_symbol("BYR")
            .with_priority(50),
        cur("BZD", 84, "Belize Dollar", fmt(".", ",", Before, One), minor("Cent", 100, 1), &["$", "BZ$"])
            .with_disambiguation_symbol("BZ$"),
        cur("CAD", 124, "Canadian Dollar", fmt(".", ",", Before, One), minor("Cent", 100, 5), &["$", "C$", "CAD$"])
            .with_disambiguation_symbol("C$"),
        cur("CDF", 976, "Congolese Franc", fmt(".", ",", AfterWithSpace, Eight), minor("Centime", 100, 1), &["Fr", "FC"])
            .with_disambiguation_symbol("FC"),
        cur("CHF", 756, "Swiss Franc", fmt(".", "’", Before, One), minor("Rappen", 100, 5), &["CHF", "SFr", "Fr"]),
        cur("CLF", 990, "Unidad de Fomento", fmt(",", ".", Before, One), minor("Peso", 10000, 1), &["UF"]),
        cur("CLP", 152, "Chilean Peso", fmt(",", ".", Before, One), minor("Peso", 1, 1), &["$"])
            .with_disambiguation_symbol("CLP"),
        cur("CNY", 156, "Chinese Renminbi Yuan", fmt(".", ",", Before, One), minor("Fen", 100, 1), &["¥", "CN¥", "元", "CN元"]),
        cur("COP", 170, "Colombian Peso", fmt(",", ".", Before, One), minor("Centavo", 100, 20), &["$", "COL$"])
            .with_disambiguation_symbol("COL$"),
        cur("CRC", 188, "Costa Rican Colón", fmt(",", ".", Before, One), minor("Céntimo", 100, 500), &["₡", "¢"]),
        cur("CUC", 931, "Cuban Convertible Peso", fmt(".", ",", AfterWithSpace, Eight), minor("Centavo", 100, 1), &["$", "CUC$"])
            .with_disambiguation_symbol("CUC$"),
        cur("CUP", 192, "Cuban Peso", fmt(".", ",", Before, One), minor("Centavo", 100, 1), &["$", "$MN"])
            .with_disambiguation_symbol("$MN"),
        cur("CVE", 132, "Cape Verdean Escudo", fmt(".", ",", AfterWithSpace, Eight), minor("Centavo", 100, 100), &["$", "Esc"]),
        cur("CZK", 203, "Czech Koruna", fmt(",", " ", AfterWithSpace, Eight), minor("Haléř", 100, 100), &["Kč"]),
        cur("DJF", 262, "Djiboutian Franc", fmt(".", ",", AfterWithSpace, Eight), minor("Centime", 1, 100), &["Fdj"]),
        cur("DKK", 208, "Danish Krone", fmt(",", ".", AfterWithSpace, Eight), minor("Øre", 100, 50), &["kr.", ",-"])
            .with_disambiguation_symbol("DKK"),
        cur("DOP", 214, "Dominican Peso", fmt(".", ",", Before, One), minor("Centavo", 100, 100), &["$", "RD$"])
            .with_disambiguation_symbol("RD$"),
        cur("DZD", 12, "Algerian Dinar", fmt(".", ",", AfterWithSpace, Eight), minor("Centime", 100, 100), &["د.ج", "DA"]),
        cur("EGP", 818, "Egyptian Pound", fmt(".", ",", Before, One), minor("Piastre", 100, 25), &["ج.م", "LE", "E£", "L.E."]),
        cur("ERN", 232, "Eritrean Nakfa", fmt(".", ",", AfterWithSpace, Eight), minor("Cent", 100, 1), &["Nfk"]),
        cur("ETB", 230, "Ethiopian Birr", fmt(".", ",", AfterWithSpace, Eight), minor("Santim", 100, 1), &["Br", "ብር"]),
        cur("EUR", 978, "Euro", fmt(",", ".", Before, One), minor("Cent", 100, 1), &["€"]),
        cur("FJD", 242, "Fijian Dollar", fmt(".", ",", AfterWithSpace, Eight), minor("Cent", 100, 5), &["$", "FJ$"]),
        cur("FKP", 238, "Falkland Pound", fmt(".", ",", AfterWithSpace, Eight), minor("Penny", 100, 1), &["£", "FK£"]),
        cur("GBP", 826, "British Pound", fmt(".", ",", Before, One), minor("Penny", 100, 1), &["£"])
            .with_priority(3),
        cur("GEL", 981, "Georgian Lari", fmt(".", ",", AfterWithSpace, Eight), minor("Tetri", 100, 1), &["ლ", "lari"]),
        cur("GHS", 936, "Ghanaian Cedi", fmt(".", ",", Before, One), minor("Pesewa", 100, 1), &["₵", "GH¢", "GH₵"]),
        cur("GIP", 292, "Gibraltar Pound", fmt(".", ",", Before, One), minor("Penny", 100, 1), &["£"])
            .with_disambiguation_symbol("GIP"),
        cur("GMD", 270, "Gambian Dalasi", fmt(".", ",", AfterWithSpace, Eight), minor("Butut", 100, 1), &["D"]),
        cur("GNF", 324, "Guinean Franc", fmt(".", ",", AfterWithSpace, Eight), minor("Centime", 1, 100), &["Fr", "FG", "GFr"])
            .with_disambiguation_symbol("FG"),
        cur("GTQ", 320, "Guatemalan Quetzal", fmt(".", ",", Before, One), minor("Centavo", 100, 1), &["Q"]),
        cur("GYD", 328, "Guyanese Dollar", fmt(".", ",", AfterWithSpace, Eight), minor("Cent", 100, 100), &["$", "G$"])
            .with_disambiguation_symbol("G$"),
        cur("HKD", 344, "Hong Kong Dollar", fmt(".", ",", Before, One), minor("Cent", 100, 10), &["$", "HK$"])
            .with_disambiguation_symbol("HK$"),
        cur("HNL", 340, "Honduran Lempira", fmt(".", ",", Before, One), minor("Centavo", 100, 5), &["L"])
            .with_disambiguation_symbol("HNL"),
        cur("HRK", 191, "Croatian Kuna", fmt(",", ".", AfterWithSpace, Eight), minor("Lipa", 100, 1), &["kn"]),
        cur("HTG", 332, "Haitian Gourde", fmt(".", ",", AfterWithSpace, Eight), minor("Centime", 100, 5), &["G"]),
        cur("HUF", 348, "Hungarian Forint", fmt(",", " ", AfterWithSpace, Eight), minor("", 1, 5), &["Ft"]),
        cur("IDR", 360, "Indonesian Rupiah", fmt(",", ".", Before, One), minor("Sen", 100, 5000), &["Rp"]),
        cur("ILS", 376, "Israeli New Sheqel", fmt(".", ",", AfterWithSpace, Eight), minor("Agora", 100, 10), &["₪", "ש״ח", "NIS"]),
        cur("INR", 356, "Indian Rupee", fmt(".", ",", Before, One), minor("Paisa", 100, 50), &["₹", "Rs", "৳", "૱", "௹", "रु", "₨"]),
        cur("IQD", 368, "Iraqi Dinar", fmt(".", ",", AfterWithSpace, Eight), minor("Fils", 1000, 50000), &["ع.د"]),
        cur("IRR", 364, "Iranian Rial", fmt(".", ",", AfterWithSpace, Eight), minor("", 100, 5000), &["﷼"]),
        cur("ISK", 352, "Icelandic Króna", fmt(",", ".", AfterWithSpace, Eight), minor("", 1, 1), &["kr.", "Íkr"]),
        cur("JOD", 400, "Jordanian Dinar", fmt(".", ",", Before, One), minor("Fils", 1000, 5), &["د.ا", "JD"]),
        cur("KWD", 414, "Kuwaiti Dinar", fmt(".", ",", Before, One), minor("Fils", 1000, 5), &["د.ك", "K.D."]),
        cur("LBP", 422, "Lebanese Pound", fmt(".", ",", Before, One), minor("Piastre", 100, 25000), &["ل.ل", "£", "L£"]),
        cur("SEK", 752, "Swedish Krona", fmt(",", " ", AfterWithSpace, Eight), minor("Öre", 100, 100), &["kr", ":-"])
            .with_disambiguation_symbol("SEK"),
        cur("USD", 840, "United States Dollar", fmt(".", ",", Before, One), minor("Cent", 100, 1), &["$", "US$"])
            .with_disambiguation_symbol("US$"),
        cur("ZAR", 710, "South African Rand", fmt(".", ",", Before, One), minor("Cent", 100, 10), &["R"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_codes_are_unique() {
        let all = builtin();
        let mut codes: Vec<&str> = all.iter().map(|c| c.code.as_str()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn test_builtin_invariants() {
        for currency in builtin() {
            assert!(!currency.symbols.is_empty(), "{} has no symbols", currency.code);
            assert!(currency.minor_unit.per_major >= 1, "{} has a zero ratio", currency.code);
            assert!(currency.is_iso(), "{} should carry a numeric id", currency.code);
        }
    }

    #[test]
    fn test_aed_definition() {
        let all = builtin();
        let aed = all.iter().find(|c| c.code == "AED").unwrap();
        assert_eq!(aed.priority, Currency::DEFAULT_PRIORITY);
        assert_eq!(aed.name, "United Arab Emirates Dirham");
        assert_eq!(aed.symbol(), "د.إ.‏");
        assert_eq!(aed.symbols, vec!["د.إ.‏", "DH", "Dhs"]);
        assert_eq!(aed.minor_unit.name.as_deref(), Some("Fils"));
        assert_eq!(aed.minor_unit.per_major, 100);
        assert_eq!(aed.minor_unit.smallest_denomination, Some(25));
        assert_eq!(aed.format.decimal_separator, ".");
        assert_eq!(aed.format.group_separator, ",");
        assert_eq!(aed.numeric, Some(784));
    }

    #[test]
    fn test_usd_definition() {
        let all = builtin();
        let usd = all.iter().find(|c| c.code == "USD").unwrap();
        assert_eq!(usd.symbol(), "$");
        assert_eq!(usd.disambiguation_symbol.as_deref(), Some("US$"));
        assert_eq!(usd.minor_unit.smallest_denomination, Some(1));
        assert_eq!(usd.exponent(), 2);
        assert!(usd.is_iso());
    }

    #[test]
    fn test_exponent_classes() {
        let all = builtin();
        let exponent = |code: &str| all.iter().find(|c| c.code == code).unwrap().exponent();
        // zero-decimal
        assert_eq!(exponent("ISK"), 0);
        assert_eq!(exponent("HUF"), 0);
        assert_eq!(exponent("BIF"), 0);
        assert_eq!(exponent("CLP"), 0);
        // three-decimal
        assert_eq!(exponent("BHD"), 3);
        assert_eq!(exponent("JOD"), 3);
        assert_eq!(exponent("KWD"), 3);
        assert_eq!(exponent("IQD"), 3);
        // four-decimal
        assert_eq!(exponent("CLF"), 4);
    }

    #[test]
    fn test_unnamed_minor_units() {
        let all = builtin();
        let minor_name = |code: &str| all.iter().find(|c| c.code == code).unwrap().minor_unit.name.clone();
        assert_eq!(minor_name("BYR"), None);
        assert_eq!(minor_name("HUF"), None);
        assert_eq!(minor_name("ISK"), None);
        assert_eq!(minor_name("USD"), Some("Cent".to_string()));
    }
}
