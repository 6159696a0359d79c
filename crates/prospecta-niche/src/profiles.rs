//! Static niche profiles: problems, solutions and conversation hooks.

use serde::Serialize;

/// Canned sales material for one business niche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NicheProfile {
    pub key: &'static str,
    /// Typical online problems of businesses in this niche.
    pub problems: &'static [&'static str],
    /// Services the agency offers for those problems.
    pub solutions: &'static [&'static str],
    /// Example opening lines.
    pub hooks: &'static [&'static str],
}

pub(crate) const PROFILES: &[NicheProfile] = &[
    NicheProfile {
        key: "restaurante",
        problems: &[
            "Los clientes no encuentran el menú actualizado en línea",
            "Dependen de apps de delivery que cobran comisiones altas",
            "No reciben reservaciones fuera del horario de atención",
        ],
        solutions: &[
            "Menú digital con fotos y precios siempre actualizado",
            "Pedidos directos por WhatsApp sin comisiones de terceros",
            "Sistema de reservaciones en línea las 24 horas",
        ],
        hooks: &[
            "¿Cuántos pedidos se les van cada semana porque el cliente no encuentra su menú?",
            "Vi sus reseñas en Google y la comida se ve increíble; ¿tienen dónde mostrar el menú completo?",
        ],
    },
    NicheProfile {
        key: "cafeteria",
        problems: &[
            "Su ambiente y productos no se aprecian fuera de redes sociales",
            "No tienen forma de tomar pedidos anticipados",
            "Los clientes nuevos no conocen sus horarios ni ubicación",
        ],
        solutions: &[
            "Sitio con galería del local y carta de bebidas",
            "Pedidos para recoger sin hacer fila",
            "Ficha con horarios, mapa y contacto directo",
        ],
        hooks: &[
            "Su cafetería tiene excelentes reseñas; ¿les gustaría que más gente del barrio la encontrara?",
            "¿Sus clientes pueden pedir su café antes de llegar?",
        ],
    },
    NicheProfile {
        key: "peluqueria",
        problems: &[
            "Las citas se agendan por teléfono y se pierden llamadas",
            "No muestran su trabajo más allá de Instagram",
            "Los huecos en la agenda no se llenan",
        ],
        solutions: &[
            "Agenda de citas en línea con confirmación automática",
            "Portafolio de cortes y peinados con antes y después",
            "Recordatorios por WhatsApp para reducir ausencias",
        ],
        hooks: &[
            "¿Cuántas citas pierden cuando no pueden contestar el teléfono?",
            "Sus trabajos merecen una vitrina propia, no solo un perfil en redes",
        ],
    },
    NicheProfile {
        key: "barberia",
        problems: &[
            "Los clientes esperan sin saber cuánto tardarán",
            "No tienen reservas en línea por barbero",
            "Dependen del boca a boca para atraer clientes nuevos",
        ],
        solutions: &[
            "Reservas por barbero y servicio desde el celular",
            "Página con servicios, precios y estilos",
            "Presencia en buscadores para su zona",
        ],
        hooks: &[
            "¿Sus clientes pueden apartar su turno sin llamar?",
            "Una barbería con sus reseñas debería aparecer primero cuando alguien busca en su colonia",
        ],
    },
    NicheProfile {
        key: "bar",
        problems: &[
            "Los eventos y promociones solo se anuncian en redes",
            "No reciben reservas de mesas para grupos",
            "El ambiente del lugar no se conoce antes de visitarlo",
        ],
        solutions: &[
            "Calendario de eventos y promociones en su propio sitio",
            "Reservas de mesa y paquetes para grupos",
            "Galería de fotos y videos del ambiente",
        ],
        hooks: &[
            "¿Dónde ven sus clientes la agenda de eventos de la semana?",
            "¿Cuántos grupos preguntan por reservas y no reciben respuesta a tiempo?",
        ],
    },
    NicheProfile {
        key: "abogado",
        problems: &[
            "Los clientes potenciales no confían en un despacho sin presencia web",
            "No explican claramente sus áreas de práctica",
            "Las consultas llegan desordenadas por distintos canales",
        ],
        solutions: &[
            "Sitio profesional con áreas de práctica y trayectoria",
            "Formulario de consulta inicial que filtra casos",
            "Artículos que responden dudas legales frecuentes",
        ],
        hooks: &[
            "Hoy la mayoría busca abogado en Google antes de llamar; ¿qué encuentran de su despacho?",
            "¿Les ayudaría recibir consultas ya filtradas por tipo de caso?",
        ],
    },
    NicheProfile {
        key: "estetica",
        problems: &[
            "Sus tratamientos no se explican en ningún lugar",
            "Las citas dependen de mensajes manuales",
            "No generan confianza con clientes nuevos",
        ],
        solutions: &[
            "Catálogo de tratamientos con precios y duración",
            "Agenda en línea con recordatorios",
            "Testimonios reales y resultados de sus clientes",
        ],
        hooks: &[
            "¿Sus clientas pueden ver todos sus tratamientos antes de escribirles?",
            "¿Cuánto tiempo dedican al día a agendar citas por mensaje?",
        ],
    },
    NicheProfile {
        key: "gimnasio",
        problems: &[
            "Los horarios de clases cambian y nadie se entera",
            "Las inscripciones solo se hacen en recepción",
            "No captan prospectos cuando el gimnasio está cerrado",
        ],
        solutions: &[
            "Horario de clases en línea siempre actualizado",
            "Inscripción y pago de membresías desde el sitio",
            "Formulario de clase de prueba gratuita",
        ],
        hooks: &[
            "¿Cuántas personas preguntan por precios y nunca regresan?",
            "Una clase de prueba reservada en línea convierte mucho mejor que una visita sin cita",
        ],
    },
    NicheProfile {
        key: "dentista",
        problems: &[
            "Los pacientes nuevos eligen por lo que ven en línea",
            "Las citas se pierden por falta de confirmación",
            "No explican sus tratamientos ni su equipo",
        ],
        solutions: &[
            "Sitio con tratamientos, equipo y consultorio",
            "Agenda de citas con confirmación automática",
            "Presencia local en buscadores para su especialidad",
        ],
        hooks: &[
            "Cuando alguien busca dentista en su zona, ¿qué encuentra primero?",
            "¿Cuántos pacientes faltan a su cita sin avisar?",
        ],
    },
    NicheProfile {
        key: "clinica",
        problems: &[
            "Los pacientes no saben qué especialidades atienden",
            "Las llamadas saturan la recepción",
            "No transmiten confianza en línea",
        ],
        solutions: &[
            "Directorio de especialidades y médicos",
            "Citas en línea por especialidad",
            "Información clara de ubicación, horarios y seguros aceptados",
        ],
        hooks: &[
            "¿Su recepción pasa el día contestando las mismas preguntas por teléfono?",
            "¿Los pacientes pueden ver qué especialistas atienden antes de llamar?",
        ],
    },
    NicheProfile {
        key: "veterinaria",
        problems: &[
            "Las emergencias no encuentran su teléfono rápido",
            "No recuerdan a los dueños las vacunas pendientes",
            "Sus servicios de estética y hotel no se conocen",
        ],
        solutions: &[
            "Sitio con botón de llamada de emergencia",
            "Recordatorios de vacunas y citas por WhatsApp",
            "Página de servicios con precios y reservas",
        ],
        hooks: &[
            "En una emergencia, ¿qué tan rápido encuentran su número en el celular?",
            "¿Sus clientes saben todos los servicios que ofrecen además de consulta?",
        ],
    },
    NicheProfile {
        key: "contador",
        problems: &[
            "Los clientes llegan solo por recomendación",
            "No comunican sus servicios de forma clara",
            "La recepción de documentos es desordenada",
        ],
        solutions: &[
            "Sitio profesional con servicios y paquetes",
            "Formulario de contacto para nuevas empresas",
            "Sección de avisos fiscales y fechas importantes",
        ],
        hooks: &[
            "¿Cuántos clientes nuevos les llegan fuera de las recomendaciones?",
            "Un calendario fiscal en su sitio atrae consultas en cada temporada de declaraciones",
        ],
    },
    NicheProfile {
        key: "inmobiliaria",
        problems: &[
            "Sus propiedades dependen de portales que cobran por anuncio",
            "Los prospectos no encuentran el inventario completo",
            "El seguimiento de interesados es manual",
        ],
        solutions: &[
            "Catálogo propio de propiedades con filtros y fotos",
            "Formularios de interés conectados a WhatsApp",
            "Fichas de propiedad fáciles de compartir",
        ],
        hooks: &[
            "¿Cuánto pagan al mes en portales por mostrar sus propiedades?",
            "¿Sus clientes pueden ver todo su inventario en un solo lugar?",
        ],
    },
    NicheProfile {
        key: "seguros",
        problems: &[
            "Los productos de seguro son difíciles de explicar por mensaje",
            "No generan prospectos en línea",
            "Los clientes no distinguen al agente de la aseguradora",
        ],
        solutions: &[
            "Sitio con explicación clara de cada póliza",
            "Cotizador básico que capta datos de prospectos",
            "Marca personal del agente con testimonios",
        ],
        hooks: &[
            "¿Cuántas cotizaciones podrían llegarles solas si tuvieran un formulario en línea?",
            "¿Sus clientes lo encuentran a usted o solo a la aseguradora?",
        ],
    },
    NicheProfile {
        key: "construccion",
        problems: &[
            "No muestran obras terminadas a clientes potenciales",
            "Compiten solo por precio",
            "Las cotizaciones llegan sin información suficiente",
        ],
        solutions: &[
            "Portafolio de proyectos con fotos del proceso",
            "Página de servicios que transmite experiencia y seriedad",
            "Formulario de cotización con los datos del proyecto",
        ],
        hooks: &[
            "¿Dónde pueden ver sus clientes las obras que ya han terminado?",
            "Un portafolio bien presentado ayuda a no competir solo por precio",
        ],
    },
    NicheProfile {
        key: "plomeria",
        problems: &[
            "Las urgencias llaman al primero que aparece en Google",
            "No tienen presencia en búsquedas locales",
            "Los clientes no saben qué servicios cubren",
        ],
        solutions: &[
            "Sitio optimizado para búsquedas de urgencia en su zona",
            "Botón de llamada y WhatsApp visible",
            "Lista de servicios y zonas de cobertura",
        ],
        hooks: &[
            "Cuando a alguien se le rompe una tubería, busca en Google; ¿aparecen ustedes?",
            "¿Cuántos servicios de urgencia se llevan otros por salir antes en el buscador?",
        ],
    },
    NicheProfile {
        key: "electricista",
        problems: &[
            "Dependen de recomendaciones para conseguir trabajos",
            "No transmiten confianza a clientes nuevos",
            "No aparecen en búsquedas locales",
        ],
        solutions: &[
            "Página con servicios, certificaciones y zona de cobertura",
            "Contacto directo por WhatsApp",
            "Perfil local optimizado en buscadores",
        ],
        hooks: &[
            "¿Qué encuentra un cliente nuevo cuando busca electricista en su zona?",
            "Mostrar sus trabajos y certificaciones genera confianza antes de la primera llamada",
        ],
    },
    NicheProfile {
        key: "cerrajeria",
        problems: &[
            "Las urgencias eligen al primer resultado",
            "Los clientes no saben si atienden 24 horas",
            "No tienen reseñas visibles fuera de Google",
        ],
        solutions: &[
            "Sitio rápido con llamada de un toque",
            "Horario y cobertura claramente visibles",
            "Reseñas destacadas para generar confianza",
        ],
        hooks: &[
            "Alguien encerrado fuera de casa llama al primero que ve; ¿son ustedes?",
            "¿Sus clientes saben que atienden a cualquier hora?",
        ],
    },
    NicheProfile {
        key: "lavado_autos",
        problems: &[
            "Los clientes esperan sin cita",
            "Sus paquetes de servicio no se conocen",
            "No fidelizan a clientes frecuentes",
        ],
        solutions: &[
            "Reservas de turno en línea",
            "Página de paquetes y precios",
            "Programa de lealtad por WhatsApp",
        ],
        hooks: &[
            "¿Sus clientes pueden apartar turno para no esperar?",
            "¿Tienen forma de invitar de nuevo a quien ya los visitó?",
        ],
    },
    NicheProfile {
        key: "taller_mecanico",
        problems: &[
            "Los clientes desconfían de talleres que no conocen",
            "No explican sus servicios ni especialidades",
            "Las citas se agendan solo por teléfono",
        ],
        solutions: &[
            "Sitio con servicios, marcas atendidas y garantías",
            "Agenda de servicio en línea",
            "Reseñas y fotos del taller que generan confianza",
        ],
        hooks: &[
            "Elegir taller es cuestión de confianza; ¿qué ven los clientes antes de llegar?",
            "¿Sus clientes pueden agendar servicio sin llamar?",
        ],
    },
    NicheProfile {
        key: "concesionario",
        problems: &[
            "Su inventario solo aparece en portales de terceros",
            "Los prospectos no dejan datos de contacto",
            "El seguimiento de interesados se pierde",
        ],
        solutions: &[
            "Inventario propio con fichas por vehículo",
            "Formularios de prueba de manejo y financiamiento",
            "Contacto directo por WhatsApp desde cada ficha",
        ],
        hooks: &[
            "¿Cuántos interesados ven un auto y se van sin dejar sus datos?",
            "Un inventario propio les evita depender de portales",
        ],
    },
    NicheProfile {
        key: "floreria",
        problems: &[
            "Los pedidos para fechas especiales se saturan por mensaje",
            "No muestran su catálogo completo",
            "No reciben pedidos a domicilio en línea",
        ],
        solutions: &[
            "Catálogo de arreglos con precios",
            "Pedidos en línea con fecha de entrega",
            "Campañas para fechas especiales",
        ],
        hooks: &[
            "¿Cómo les fue con los pedidos del último 14 de febrero?",
            "¿Sus clientes pueden elegir un arreglo y pedirlo sin esperar respuesta?",
        ],
    },
    NicheProfile {
        key: "joyeria",
        problems: &[
            "Sus piezas no se aprecian en redes sociales",
            "Los clientes no confían en comprar sin ver la tienda",
            "No captan pedidos personalizados",
        ],
        solutions: &[
            "Catálogo visual con fotografías de calidad",
            "Sitio que transmite la trayectoria de la joyería",
            "Formulario para diseños personalizados",
        ],
        hooks: &[
            "¿Sus piezas tienen un escaparate en línea a su altura?",
            "¿Cuántos clientes les piden diseños personalizados por mensaje?",
        ],
    },
    NicheProfile {
        key: "ropa",
        problems: &[
            "Solo venden a quien pasa por la tienda",
            "Las novedades se pierden en redes",
            "No tienen catálogo con tallas y precios",
        ],
        solutions: &[
            "Catálogo en línea con tallas y disponibilidad",
            "Pedidos por WhatsApp desde cada prenda",
            "Sección de novedades y temporadas",
        ],
        hooks: &[
            "¿Qué pasa con los clientes que ven una prenda en redes y quieren saber la talla?",
            "¿Les gustaría vender también a quien no puede ir a la tienda?",
        ],
    },
    NicheProfile {
        key: "muebleria",
        problems: &[
            "El catálogo no cabe en redes sociales",
            "Los clientes preguntan precios uno por uno",
            "No muestran opciones de entrega y financiamiento",
        ],
        solutions: &[
            "Catálogo con medidas, acabados y precios",
            "Cotizaciones por WhatsApp desde cada producto",
            "Información clara de entrega y pagos",
        ],
        hooks: &[
            "¿Cuántas veces al día responden la misma pregunta de precio y medidas?",
            "¿Sus clientes pueden ver todo el catálogo antes de visitar la tienda?",
        ],
    },
    NicheProfile {
        key: "ferreteria",
        problems: &[
            "Los clientes no saben si tienen un producto en existencia",
            "Compiten con grandes cadenas",
            "No reciben pedidos de contratistas en línea",
        ],
        solutions: &[
            "Catálogo de productos principales con disponibilidad",
            "Pedidos por WhatsApp para recoger o entregar",
            "Página para clientes frecuentes y contratistas",
        ],
        hooks: &[
            "¿Cuántas llamadas reciben al día preguntando si tienen algo en existencia?",
            "La atención cercana es su ventaja frente a las cadenas; ¿la muestran en línea?",
        ],
    },
    NicheProfile {
        key: "hotel",
        problems: &[
            "Pagan comisiones altas a plataformas de reservas",
            "No tienen reservación directa",
            "Sus habitaciones no se muestran bien",
        ],
        solutions: &[
            "Sitio con motor de reservas directas",
            "Galería de habitaciones y servicios",
            "Ofertas exclusivas para reservas directas",
        ],
        hooks: &[
            "¿Qué porcentaje de sus reservas pasa por plataformas con comisión?",
            "Cada reserva directa es una comisión que se queda en su hotel",
        ],
    },
    NicheProfile {
        key: "turismo",
        problems: &[
            "Sus paquetes no se pueden consultar en línea",
            "Los clientes comparan con agencias grandes",
            "Las cotizaciones tardan en enviarse",
        ],
        solutions: &[
            "Catálogo de paquetes y destinos",
            "Formulario de cotización con fechas y personas",
            "Testimonios de viajeros y galerías",
        ],
        hooks: &[
            "¿Sus clientes pueden ver sus paquetes sin esperar una cotización?",
            "¿Cuánto tardan hoy en responder una solicitud de viaje?",
        ],
    },
    NicheProfile {
        key: "escuela",
        problems: &[
            "Los padres investigan en línea antes de visitar",
            "La información de inscripciones no está disponible",
            "No comunican su propuesta educativa",
        ],
        solutions: &[
            "Sitio con propuesta educativa, instalaciones y niveles",
            "Formulario de solicitud de informes e inscripción",
            "Sección de noticias y calendario escolar",
        ],
        hooks: &[
            "¿Qué encuentran los padres cuando buscan escuelas en su zona?",
            "¿Cuántos informes de inscripción reciben fuera de temporada?",
        ],
    },
    NicheProfile {
        key: "guarderia",
        problems: &[
            "Los padres necesitan confianza antes de visitar",
            "No muestran instalaciones ni personal",
            "La información de cupos y horarios no está en línea",
        ],
        solutions: &[
            "Sitio con instalaciones, personal y protocolos",
            "Formulario para agendar visitas",
            "Información de horarios, cupo y costos",
        ],
        hooks: &[
            "Los padres buscan seguridad; ¿pueden ver sus instalaciones antes de visitar?",
            "¿Cómo se enteran los padres de que tienen lugares disponibles?",
        ],
    },
    NicheProfile {
        key: "fotografia",
        problems: &[
            "Su portafolio está disperso en redes",
            "Los paquetes y precios se explican uno por uno",
            "No aparecen en búsquedas de eventos",
        ],
        solutions: &[
            "Portafolio profesional por tipo de sesión",
            "Página de paquetes con formulario de reserva",
            "Presencia local en buscadores",
        ],
        hooks: &[
            "Su trabajo merece un portafolio propio, no solo un perfil en redes",
            "¿Cuántas parejas los encuentran cuando buscan fotógrafo para su boda?",
        ],
    },
    NicheProfile {
        key: "eventos",
        problems: &[
            "Los clientes no ven el espacio antes de visitarlo",
            "Las fechas disponibles se consultan por mensaje",
            "Los paquetes no se explican claramente",
        ],
        solutions: &[
            "Galería del salón y recorrido virtual",
            "Consulta de fechas y solicitud de cotización en línea",
            "Página de paquetes y servicios incluidos",
        ],
        hooks: &[
            "¿Cuántas personas preguntan por fechas disponibles cada semana?",
            "¿Pueden sus clientes ver el salón montado antes de agendar una visita?",
        ],
    },
    NicheProfile {
        key: "lavanderia",
        problems: &[
            "Los clientes no conocen sus precios ni tiempos de entrega",
            "No ofrecen recolección a domicilio en línea",
            "Dependen del paso de la gente",
        ],
        solutions: &[
            "Página con precios y tiempos de entrega",
            "Solicitud de recolección por WhatsApp",
            "Presencia local en buscadores",
        ],
        hooks: &[
            "¿Sus clientes pueden pedir recolección sin llamar?",
            "¿Cuántos vecinos saben que ofrecen servicio a domicilio?",
        ],
    },
    NicheProfile {
        key: "mudanzas",
        problems: &[
            "Las cotizaciones llegan sin información suficiente",
            "Los clientes desconfían de empresas sin presencia web",
            "Compiten solo por precio",
        ],
        solutions: &[
            "Formulario de cotización con origen, destino y volumen",
            "Sitio con seguros, garantías y testimonios",
            "Página de servicios de embalaje y almacenaje",
        ],
        hooks: &[
            "¿Cuánto tiempo pierden cotizando mudanzas sin los datos completos?",
            "Confiar sus cosas a alguien requiere seguridad; ¿qué ven antes de llamarles?",
        ],
    },
    NicheProfile {
        key: "limpieza",
        problems: &[
            "Sus servicios para empresas no se conocen",
            "Las cotizaciones se hacen caso por caso",
            "No transmiten profesionalismo en línea",
        ],
        solutions: &[
            "Sitio con servicios residenciales y comerciales",
            "Formulario de cotización por tipo de espacio",
            "Testimonios de clientes empresariales",
        ],
        hooks: &[
            "¿Las empresas de su zona saben que ofrecen contratos de limpieza?",
            "¿Cómo llegan hoy sus clientes comerciales?",
        ],
    },
    NicheProfile {
        key: "imprenta",
        problems: &[
            "Los archivos llegan por distintos canales y en mal formato",
            "Los precios se cotizan uno por uno",
            "Sus trabajos no se muestran",
        ],
        solutions: &[
            "Catálogo de productos con precios base",
            "Formulario de pedido con carga de archivos",
            "Galería de trabajos realizados",
        ],
        hooks: &[
            "¿Cuántos pedidos les llegan con archivos que hay que corregir?",
            "¿Sus clientes pueden ver precios base sin pedir cotización?",
        ],
    },
    NicheProfile {
        key: "optica",
        problems: &[
            "Los clientes no saben qué marcas manejan",
            "Los exámenes de la vista se agendan por teléfono",
            "Compiten con cadenas grandes",
        ],
        solutions: &[
            "Catálogo de armazones y marcas",
            "Agenda de examen de la vista en línea",
            "Sitio que destaca la atención personalizada",
        ],
        hooks: &[
            "¿Sus clientes pueden agendar su examen de la vista en línea?",
            "La atención personalizada es su ventaja frente a las cadenas; ¿se nota en línea?",
        ],
    },
    NicheProfile {
        key: "farmacia",
        problems: &[
            "Los clientes no saben si tienen un medicamento",
            "No ofrecen pedidos a domicilio en línea",
            "Compiten con cadenas nacionales",
        ],
        solutions: &[
            "Consulta de disponibilidad por WhatsApp",
            "Pedidos a domicilio desde el sitio",
            "Presencia local con horarios y servicios",
        ],
        hooks: &[
            "¿Cuántas llamadas reciben preguntando si tienen un medicamento?",
            "¿Sus vecinos saben que pueden pedirles a domicilio?",
        ],
    },
    NicheProfile {
        key: "generico",
        problems: &[
            "Los clientes potenciales no los encuentran en línea",
            "No tienen un lugar propio donde mostrar sus servicios",
            "Dependen por completo de redes sociales y recomendaciones",
        ],
        solutions: &[
            "Sitio web profesional con sus servicios y contacto",
            "Contacto directo por WhatsApp desde el sitio",
            "Presencia local en buscadores",
        ],
        hooks: &[
            "Cuando alguien busca su negocio en Google, ¿qué encuentra?",
            "¿Cuántos clientes nuevos podrían llegarles si tuvieran presencia en línea?",
        ],
    },
];
