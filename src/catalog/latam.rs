//! Built-in table of Latin American cities.

/// `(name, latitude, longitude)` for each built-in city.
pub(super) const LATAM_CITIES: [(&str, f64, f64); 28] = [
    ("Bogota", 4.7110, -74.0721),
    ("Medellin", 6.2442, -75.5812),
    ("Cali", 3.4516, -76.5320),
    ("Cartagena", 10.3910, -75.4794),
    ("Caracas", 10.4806, -66.9036),
    ("Quito", -0.1807, -78.4678),
    ("Guayaquil", -2.1700, -79.9224),
    ("Lima", -12.0464, -77.0428),
    ("Santiago", -33.4489, -70.6693),
    ("BuenosAires", -34.6037, -58.3816),
    ("Montevideo", -34.9011, -56.1645),
    ("Asuncion", -25.2637, -57.5759),
    ("LaPaz", -16.4897, -68.1193),
    ("Sucre", -19.0196, -65.2619),
    ("Brasilia", -15.7939, -47.8828),
    ("SaoPaulo", -23.5505, -46.6333),
    ("RioDeJaneiro", -22.9068, -43.1729),
    ("CiudadMexico", 19.4326, -99.1332),
    ("Guadalajara", 20.6597, -103.3496),
    ("Monterrey", 25.6866, -100.3161),
    ("Havana", 23.1136, -82.3666),
    ("SanJoseCR", 9.9281, -84.0907),
    ("PanamaCity", 8.9824, -79.5199),
    ("SantoDomingo", 18.4861, -69.9312),
    ("Tegucigalpa", 14.0723, -87.1921),
    ("Managua", 12.1140, -86.2362),
    ("SanSalvador", 13.6929, -89.2182),
    ("BelizeCity", 17.5046, -88.1962),
];
