//! Ordered keyword table behind [`crate::resolve_niche`].
//!
//! Keywords are written in normalized form (see
//! [`crate::normalize_category`]) and matched as substrings. The first niche
//! with a matching keyword wins, so order matters wherever one niche's keyword
//! is contained in another's input:
//!
//! - `barberia` precedes `bar`.
//! - `peluqueria` precedes `estetica` ("peluqueria y spa" is a hair salon).
//! - `abogado` precedes `estetica` ("despacho" contains "spa").
//! - `lavado_autos` precedes `taller_mecanico` and `concesionario`.

/// Key of the fallback profile. Always present in the profile table.
pub const GENERIC_NICHE: &str = "generico";

pub(crate) const NICHE_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "restaurante",
        &[
            "restaurante",
            "restaurant",
            "comida",
            "fonda",
            "taqueria",
            "marisqueria",
            "pizzeria",
            "asador",
            "mealtakeaway",
            "mealdelivery",
        ],
    ),
    (
        "cafeteria",
        &[
            "cafeteria",
            "cafe",
            "coffee",
            "panaderia",
            "bakery",
            "pasteleria",
            "reposteria",
        ],
    ),
    (
        "peluqueria",
        &[
            "peluqueria",
            "salon de belleza",
            "hair",
            "cabello",
            "peinado",
            "corte de pelo",
            "estilista",
        ],
    ),
    ("barberia", &["barberia", "barber"]),
    (
        "bar",
        &["bar", "cantina", "cerveceria", "nightclub", "discoteca", "antro"],
    ),
    (
        "abogado",
        &[
            "abogad",
            "despacho",
            "juridic",
            "notaria",
            "lawyer",
            "legal",
        ],
    ),
    (
        "estetica",
        &[
            "estetica",
            "spa",
            "belleza",
            "beautysalon",
            "manicure",
            "nail",
            "masaje",
            "cosmetolog",
        ],
    ),
    (
        "gimnasio",
        &[
            "gimnasio",
            "gym",
            "fitness",
            "crossfit",
            "yoga",
            "pilates",
            "boxeo",
            "entrenamiento",
        ],
    ),
    (
        "dentista",
        &["dentista", "dental", "odontolog", "dentist", "ortodonc"],
    ),
    (
        "clinica",
        &[
            "clinica",
            "medico",
            "doctor",
            "consultorio",
            "salud",
            "fisioterap",
            "physiotherapist",
            "psicolog",
            "nutriolog",
        ],
    ),
    (
        "veterinaria",
        &["veterinari", "veterinary", "mascota", "grooming"],
    ),
    (
        "contador",
        &[
            "contador",
            "contable",
            "contabilidad",
            "accounting",
            "fiscal",
            "impuestos",
        ],
    ),
    (
        "inmobiliaria",
        &[
            "inmobiliari",
            "bienes raices",
            "realestate",
            "real estate",
            "propiedades",
        ],
    ),
    ("seguros", &["seguros", "aseguradora", "insurance"]),
    (
        "construccion",
        &[
            "construc",
            "arquitect",
            "remodelacion",
            "contractor",
            "albanil",
        ],
    ),
    ("plomeria", &["plomer", "fontaner", "plumber"]),
    (
        "electricista",
        &["electricista", "electrician", "electrico", "instalaciones electricas"],
    ),
    ("cerrajeria", &["cerrajer", "locksmith", "llaves"]),
    (
        "lavado_autos",
        &[
            "lavado de autos",
            "autolavado",
            "carwash",
            "car wash",
            "lavado de coches",
            "detailing",
        ],
    ),
    (
        "taller_mecanico",
        &[
            "taller mecanico",
            "mecanic",
            "carrepair",
            "automotriz",
            "refaccion",
            "llantera",
            "hojalateria",
        ],
    ),
    (
        "concesionario",
        &[
            "concesionari",
            "agencia de autos",
            "cardealer",
            "seminuevos",
            "autos",
        ],
    ),
    ("floreria", &["florer", "floristeria", "florist", "flores"]),
    ("joyeria", &["joyeri", "jewelry", "relojeria", "bisuteria"]),
    (
        "ropa",
        &[
            "ropa",
            "boutique",
            "moda",
            "clothing",
            "zapater",
            "calzado",
            "shoestore",
        ],
    ),
    (
        "muebleria",
        &["muebl", "furniture", "colchon", "decoracion"],
    ),
    (
        "ferreteria",
        &["ferreter", "hardware", "tlapaleria", "materiales"],
    ),
    (
        "hotel",
        &["hotel", "hostal", "posada", "lodging", "motel", "hospedaje", "cabanas"],
    ),
    (
        "turismo",
        &["turism", "agencia de viajes", "travelagency", "viajes", "tours"],
    ),
    (
        "escuela",
        &[
            "escuela",
            "colegio",
            "academia",
            "instituto",
            "school",
            "cursos",
            "idiomas",
        ],
    ),
    (
        "guarderia",
        &["guarderia", "estancia infantil", "kinder", "daycare", "preescolar"],
    ),
    (
        "fotografia",
        &["fotograf", "photograph", "estudio fotografico"],
    ),
    (
        "eventos",
        &[
            "eventos",
            "salon de fiestas",
            "banquete",
            "bodas",
            "fiestas",
            "catering",
        ],
    ),
    ("lavanderia", &["lavanderia", "tintoreria", "laundry"]),
    ("mudanzas", &["mudanza", "movingcompany", "fletes"]),
    ("limpieza", &["limpieza", "cleaning", "fumigacion"]),
    (
        "imprenta",
        &["imprenta", "impresion", "serigrafia", "rotulacion", "printing"],
    ),
    ("optica", &["optica", "optometr", "lentes", "anteojos"]),
    ("farmacia", &["farmacia", "pharmacy", "drugstore", "botica"]),
];
