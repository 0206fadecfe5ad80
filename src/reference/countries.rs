// ISO 3166-1 alpha-2 country codes and display names.
// Used by the country picker, favourites and booking links.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
}

pub const COUNTRIES: &[Country] = &[
    Country { code: "AD", name: "Andorra" },
    Country { code: "AE", name: "United Arab Emirates" },
    Country { code: "AF", name: "Afghanistan" },
    Country { code: "AG", name: "Antigua and Barbuda" },
    Country { code: "AL", name: "Albania" },
    Country { code: "AM", name: "Armenia" },
    Country { code: "AO", name: "Angola" },
    Country { code: "AR", name: "Argentina" },
    Country { code: "AT", name: "Austria" },
    Country { code: "AU", name: "Australia" },
    Country { code: "AZ", name: "Azerbaijan" },
    Country { code: "BA", name: "Bosnia and Herzegovina" },
    Country { code: "BB", name: "Barbados" },
    Country { code: "BD", name: "Bangladesh" },
    Country { code: "BE", name: "Belgium" },
    Country { code: "BF", name: "Burkina Faso" },
    Country { code: "BG", name: "Bulgaria" },
    Country { code: "BH", name: "Bahrain" },
    Country { code: "BI", name: "Burundi" },
    Country { code: "BJ", name: "Benin" },
    Country { code: "BN", name: "Brunei" },
    Country { code: "BO", name: "Bolivia" },
    Country { code: "BR", name: "Brazil" },
    Country { code: "BS", name: "Bahamas" },
    Country { code: "BT", name: "Bhutan" },
    Country { code: "BW", name: "Botswana" },
    Country { code: "BY", name: "Belarus" },
    Country { code: "BZ", name: "Belize" },
    Country { code: "CA", name: "Canada" },
    Country { code: "CD", name: "Democratic Republic of the Congo" },
    Country { code: "CF", name: "Central African Republic" },
    Country { code: "CG", name: "Republic of the Congo" },
    Country { code: "CH", name: "Switzerland" },
    Country { code: "CI", name: "Cote d'Ivoire" },
    Country { code: "CL", name: "Chile" },
    Country { code: "CM", name: "Cameroon" },
    Country { code: "CN", name: "China" },
    Country { code: "CO", name: "Colombia" },
    Country { code: "CR", name: "Costa Rica" },
    Country { code: "CU", name: "Cuba" },
    Country { code: "CV", name: "Cape Verde" },
    Country { code: "CY", name: "Cyprus" },
    Country { code: "CZ", name: "Czech Republic" },
    Country { code: "DE", name: "Germany" },
    Country { code: "DJ", name: "Djibouti" },
    Country { code: "DK", name: "Denmark" },
    Country { code: "DM", name: "Dominica" },
    Country { code: "DO", name: "Dominican Republic" },
    Country { code: "DZ", name: "Algeria" },
    Country { code: "EC", name: "Ecuador" },
    Country { code: "EE", name: "Estonia" },
    Country { code: "EG", name: "Egypt" },
    Country { code: "ER", name: "Eritrea" },
    Country { code: "ES", name: "Spain" },
    Country { code: "ET", name: "Ethiopia" },
    Country { code: "FI", name: "Finland" },
    Country { code: "FJ", name: "Fiji" },
    Country { code: "FM", name: "Micronesia" },
    Country { code: "FR", name: "France" },
    Country { code: "GA", name: "Gabon" },
    Country { code: "GB", name: "United Kingdom" },
    Country { code: "GD", name: "Grenada" },
    Country { code: "GE", name: "Georgia" },
    Country { code: "GH", name: "Ghana" },
    Country { code: "GM", name: "Gambia" },
    Country { code: "GN", name: "Guinea" },
    Country { code: "GQ", name: "Equatorial Guinea" },
    Country { code: "GR", name: "Greece" },
    Country { code: "GT", name: "Guatemala" },
    Country { code: "GW", name: "Guinea-Bissau" },
    Country { code: "GY", name: "Guyana" },
    Country { code: "HN", name: "Honduras" },
    Country { code: "HR", name: "Croatia" },
    Country { code: "HT", name: "Haiti" },
    Country { code: "HU", name: "Hungary" },
    Country { code: "ID", name: "Indonesia" },
    Country { code: "IE", name: "Ireland" },
    Country { code: "IL", name: "Israel" },
    Country { code: "IN", name: "India" },
    Country { code: "IQ", name: "Iraq" },
    Country { code: "IR", name: "Iran" },
    Country { code: "IS", name: "Iceland" },
    Country { code: "IT", name: "Italy" },
    Country { code: "JM", name: "Jamaica" },
    Country { code: "JO", name: "Jordan" },
    Country { code: "JP", name: "Japan" },
    Country { code: "KE", name: "Kenya" },
    Country { code: "KG", name: "Kyrgyzstan" },
    Country { code: "KH", name: "Cambodia" },
    Country { code: "KI", name: "Kiribati" },
    Country { code: "KM", name: "Comoros" },
    Country { code: "KN", name: "Saint Kitts and Nevis" },
    Country { code: "KP", name: "North Korea" },
    Country { code: "KR", name: "South Korea" },
    Country { code: "KW", name: "Kuwait" },
    Country { code: "KZ", name: "Kazakhstan" },
    Country { code: "LA", name: "Laos" },
    Country { code: "LB", name: "Lebanon" },
    Country { code: "LC", name: "Saint Lucia" },
    Country { code: "LI", name: "Liechtenstein" },
    Country { code: "LK", name: "Sri Lanka" },
    Country { code: "LR", name: "Liberia" },
    Country { code: "LS", name: "Lesotho" },
    Country { code: "LT", name: "Lithuania" },
    Country { code: "LU", name: "Luxembourg" },
    Country { code: "LV", name: "Latvia" },
    Country { code: "LY", name: "Libya" },
    Country { code: "MA", name: "Morocco" },
    Country { code: "MC", name: "Monaco" },
    Country { code: "MD", name: "Moldova" },
    Country { code: "ME", name: "Montenegro" },
    Country { code: "MG", name: "Madagascar" },
    Country { code: "MH", name: "Marshall Islands" },
    Country { code: "MK", name: "North Macedonia" },
    Country { code: "ML", name: "Mali" },
    Country { code: "MM", name: "Myanmar" },
    Country { code: "MN", name: "Mongolia" },
    Country { code: "MR", name: "Mauritania" },
    Country { code: "MT", name: "Malta" },
    Country { code: "MU", name: "Mauritius" },
    Country { code: "MV", name: "Maldives" },
    Country { code: "MW", name: "Malawi" },
    Country { code: "MX", name: "Mexico" },
    Country { code: "MY", name: "Malaysia" },
    Country { code: "MZ", name: "Mozambique" },
    Country { code: "NA", name: "Namibia" },
    Country { code: "NE", name: "Niger" },
    Country { code: "NG", name: "Nigeria" },
    Country { code: "NI", name: "Nicaragua" },
    Country { code: "NL", name: "Netherlands" },
    Country { code: "NO", name: "Norway" },
    Country { code: "NP", name: "Nepal" },
    Country { code: "NR", name: "Nauru" },
    Country { code: "NZ", name: "New Zealand" },
    Country { code: "OM", name: "Oman" },
    Country { code: "PA", name: "Panama" },
    Country { code: "PE", name: "Peru" },
    Country { code: "PG", name: "Papua New Guinea" },
    Country { code: "PH", name: "Philippines" },
    Country { code: "PK", name: "Pakistan" },
    Country { code: "PL", name: "Poland" },
    Country { code: "PT", name: "Portugal" },
    Country { code: "PW", name: "Palau" },
    Country { code: "PY", name: "Paraguay" },
    Country { code: "QA", name: "Qatar" },
    Country { code: "RO", name: "Romania" },
    Country { code: "RS", name: "Serbia" },
    Country { code: "RU", name: "Russia" },
    Country { code: "RW", name: "Rwanda" },
    Country { code: "SA", name: "Saudi Arabia" },
    Country { code: "SB", name: "Solomon Islands" },
    Country { code: "SC", name: "Seychelles" },
    Country { code: "SD", name: "Sudan" },
    Country { code: "SE", name: "Sweden" },
    Country { code: "SG", name: "Singapore" },
    Country { code: "SI", name: "Slovenia" },
    Country { code: "SK", name: "Slovakia" },
    Country { code: "SL", name: "Sierra Leone" },
    Country { code: "SM", name: "San Marino" },
    Country { code: "SN", name: "Senegal" },
    Country { code: "SO", name: "Somalia" },
    Country { code: "SR", name: "Suriname" },
    Country { code: "SS", name: "South Sudan" },
    Country { code: "ST", name: "Sao Tome and Principe" },
    Country { code: "SV", name: "El Salvador" },
    Country { code: "SY", name: "Syria" },
    Country { code: "SZ", name: "Eswatini" },
    Country { code: "TD", name: "Chad" },
    Country { code: "TG", name: "Togo" },
    Country { code: "TH", name: "Thailand" },
    Country { code: "TJ", name: "Tajikistan" },
    Country { code: "TL", name: "Timor-Leste" },
    Country { code: "TM", name: "Turkmenistan" },
    Country { code: "TN", name: "Tunisia" },
    Country { code: "TO", name: "Tonga" },
    Country { code: "TR", name: "Turkey" },
    Country { code: "TT", name: "Trinidad and Tobago" },
    Country { code: "TV", name: "Tuvalu" },
    Country { code: "TW", name: "Taiwan" },
    Country { code: "TZ", name: "Tanzania" },
    Country { code: "UA", name: "Ukraine" },
    Country { code: "UG", name: "Uganda" },
    Country { code: "US", name: "United States" },
    Country { code: "UY", name: "Uruguay" },
    Country { code: "UZ", name: "Uzbekistan" },
    Country { code: "VC", name: "Saint Vincent and the Grenadines" },
    Country { code: "VE", name: "Venezuela" },
    Country { code: "VN", name: "Vietnam" },
    Country { code: "VU", name: "Vanuatu" },
    Country { code: "WS", name: "Samoa" },
    Country { code: "YE", name: "Yemen" },
    Country { code: "ZA", name: "South Africa" },
    Country { code: "ZM", name: "Zambia" },
    Country { code: "ZW", name: "Zimbabwe" },
];
