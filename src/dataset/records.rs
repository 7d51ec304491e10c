//! The literal publication table
//!
//! The 74 source rows, transcribed from the survey of geospatial
//! disease-research publications. Country names are kept exactly as
//! they appear in the citations; the alias table resolves them at
//! construction time. Every study in this survey used Google Earth as
//! its visualization platform and none reported province-level detail,
//! so those columns are constants.

/// Province column placeholder for studies without sub-national detail
pub(crate) const PROVINCE_PLACEHOLDER: &str = "Nil";

/// Visualization platform shared by every study in the survey
pub(crate) const SOURCE_PLATFORM: &str = "Google Earth";

/// One source row: author, year, country (raw), continent,
/// health condition type, health condition, insight.
pub(crate) type RawRow = (
    &'static str,
    i32,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

pub(crate) const RAW_ROWS: &[RawRow] = &[
    ("Nagesh Shukla et al", 2020, "Australia", "Australia", "CANCERS", "Cancer", "Barriers to Healthcare Access"),
    ("Stephen K. Van Den Eeden et al", 2022, "USA", "North America", "LIFE STYLE DISEASES", "Cardiovascular disease", "Neighbourhood deprivation tracks event rates"),
    ("Christovam Barcellos et al", 2011, "Brazil", "South America", "INFECTIOUS DISEASES", "Dengue", "Outbreak clusters follow rainfall anomalies"),
    ("Frank Tanser et al", 2009, "South Africa", "Africa", "INFECTIOUS DISEASES", "HIV/AIDS", "Clinic travel time shapes treatment uptake"),
    ("Archana Patel et al", 2018, "India", "Asia", "LIFE STYLE DISEASES", "Diabetes", "Urban prevalence double the rural rate"),
    ("Wei Luo et al", 2021, "CHINA", "Asia", "RESPIRATORY DISEASES", "COPD", "Admissions rise with winter particulate levels"),
    ("Sarah E. Ray et al", 2017, "Kenya", "Africa", "INFECTIOUS DISEASES", "Malaria", "Transmission clusters near irrigated farmland"),
    ("James Mwangi et al", 2019, "Kenya", "Africa", "INFECTIOUS DISEASES", "Cholera", "Informal settlements carry the outbreak burden"),
    ("Peter J. Diggle et al", 2008, "UK", "Europe", "CANCERS", "Lung cancer", "Incidence maps mirror historic industry sites"),
    ("Maria L. Restrepo et al", 2016, "Colombia", "South America", "INFECTIOUS DISEASES", "Zika", "Case spread follows river transport routes"),
    ("Akin Abayomi et al", 2021, "Nigeria", "Africa", "INFECTIOUS DISEASES", "COVID-19", "Testing access concentrated in state capitals"),
    ("Chinwe Okafor et al", 2015, "Nigeria", "Africa", "CANCERS", "Breast cancer", "Late-stage diagnosis outside urban centres"),
    ("R. Sari Kovats et al", 2013, "UK", "Europe", "RESPIRATORY DISEASES", "Asthma", "Symptom flares align with pollen seasons"),
    ("Li Zhang et al", 2014, "Chinese", "Asia", "CANCERS", "Lung cancer", "Incidence gradient along industrial corridors"),
    ("Kamran Khan et al", 2012, "Canada", "North America", "INFECTIOUS DISEASES", "Tuberculosis", "Imported cases cluster by arrival airport"),
    ("Ana Paula Souza et al", 2019, "Brazi", "South America", "INFECTIOUS DISEASES", "Chikungunya", "Attack rates peak in coastal municipalities"),
    ("John S. Brownstein et al", 2010, "United States", "North America", "INFECTIOUS DISEASES", "Lyme disease", "Range expansion tracks suburban sprawl"),
    ("Mehmet Yilmaz et al", 2020, "Türkiye", "Asia", "LIFE STYLE DISEASES", "Obesity", "Prevalence rising fastest in peri-urban districts"),
    ("Asha Mohammed et al", 2016, "Zanzibar", "Africa", "INFECTIOUS DISEASES", "Schistosomiasis", "Infection pockets ring freshwater contact sites"),
    ("Daniel Chirwa et al", 2014, "malawi", "Africa", "INFECTIOUS DISEASES", "Malaria", "Net coverage gaps visible at village scale"),
    ("Tadesse Bekele et al", 2018, "EthiopiaMelioidosis", "Africa", "INFECTIOUS DISEASES", "Melioidosis", "Suspected environmental reservoirs flagged for sampling"),
    ("Priya Raghavan et al", 2021, "India", "Asia", "CANCERS", "Cervical cancer", "Screening deserts across eastern districts"),
    ("Hiroshi Nishiura et al", 2021, "Japan", "Asia", "INFECTIOUS DISEASES", "COVID-19", "Cluster tracing maps superspreading venues"),
    ("Marta García et al", 2015, "Spain", "Europe", "LIFE STYLE DISEASES", "Hypertension", "Coastal-inland divide in control rates"),
    ("David Rojas et al", 2017, "Mexico", "North America", "LIFE STYLE DISEASES", "Diabetes", "Sugary-drink outlets dense around case hotspots"),
    ("Grace Achieng et al", 2022, "Kenya", "Africa", "INFECTIOUS DISEASES", "HIV/AIDS", "Youth incidence concentrated along lake shore"),
    ("Thomas Müller et al", 2012, "Germany", "Europe", "RESPIRATORY DISEASES", "Asthma", "Admissions follow traffic corridor exposure"),
    ("Nguyen Thi Lan et al", 2019, "Vietnam", "Asia", "INFECTIOUS DISEASES", "Dengue", "Urban water storage drives vector habitat"),
    ("Robert Snow et al", 2007, "Kenya", "Africa", "INFECTIOUS DISEASES", "Malaria", "Endemicity surfaces guide net allocation"),
    ("Emily Carter et al", 2020, "USA", "North America", "CANCERS", "Colorectal cancer", "Screening uptake varies county to county"),
    ("Paulo Mendes et al", 2013, "Brazil", "South America", "INFECTIOUS DISEASES", "Leptospirosis", "Flood-prone favelas carry recurrent outbreaks"),
    ("Dina El-Shafei et al", 2018, "Egypt", "Africa", "LIFE STYLE DISEASES", "Cardiovascular disease", "Delta governorates exceed national rates"),
    ("Anil Kumar et al", 2015, "India", "Asia", "INFECTIOUS DISEASES", "Typhoid", "Case density follows piped-water outages"),
    ("Sipho Dlamini et al", 2012, "South Africa", "Africa", "INFECTIOUS DISEASES", "Tuberculosis", "Mining districts dominate notification maps"),
    ("Chen Wei et al", 2018, "CHINA", "Asia", "INFECTIOUS DISEASES", "Hepatitis B", "Rural prevalence above urban baseline"),
    ("Laura Bianchi et al", 2021, "Italy", "Europe", "RESPIRATORY DISEASES", "COPD", "Po valley exposure gradient in admissions"),
    ("Samuel Boateng et al", 2019, "Ghana", "Africa", "INFECTIOUS DISEASES", "Cholera", "Coastal drainage basins flag recurring risk"),
    ("Harriet Namukasa et al", 2017, "Uganda", "Africa", "INFECTIOUS DISEASES", "Malaria", "Highland fringe shows epidemic-prone pattern"),
    ("Kate Wilson et al", 2014, "Australia", "Australia", "LIFE STYLE DISEASES", "Obesity", "Remote communities face service deserts"),
    ("Abdul Rahman et al", 2020, "Bangladesh", "Asia", "INFECTIOUS DISEASES", "Cholera", "Delta flooding maps onto case surges"),
    ("Hamid Moradi et al", 2016, "Iran", "Asia", "CANCERS", "Stomach cancer", "Northern provinces carry excess incidence"),
    ("Jane Thompson et al", 2019, "UK", "Europe", "LIFE STYLE DISEASES", "Stroke", "North-south divide persists in mortality"),
    ("Lucia Vargas et al", 2018, "Peru", "South America", "INFECTIOUS DISEASES", "Leishmaniasis", "Forest-edge settlements at highest risk"),
    ("Kwame Mensah et al", 2021, "Ghana", "Africa", "RESPIRATORY DISEASES", "Asthma", "Harmattan dust season spikes presentations"),
    ("Zanele Khumalo et al", 2020, "South Africa", "Africa", "INFECTIOUS DISEASES", "COVID-19", "Township density shapes wave timing"),
    ("Ravi Shankar et al", 2010, "India", "Asia", "INFECTIOUS DISEASES", "Tuberculosis", "Notification gaps in high-burden blocks"),
    ("Olivia Martin et al", 2022, "Canada", "North America", "RESPIRATORY DISEASES", "Asthma", "Wildfire smoke events trace admission spikes"),
    ("Budi Santoso et al", 2017, "Indonesia", "Asia", "INFECTIOUS DISEASES", "Dengue", "Island-level early warning from rainfall lag"),
    ("Ayesha Siddiqui et al", 2019, "Pakistan", "Asia", "INFECTIOUS DISEASES", "Typhoid", "Drug-resistant cluster centred on one province"),
    ("Mark O'Brien et al", 2015, "Australia", "Australia", "CANCERS", "Skin cancer", "UV exposure maps predict incidence belt"),
    ("Fernanda Lima et al", 2021, "Brazil", "South America", "LIFE STYLE DISEASES", "Hypertension", "Care coverage thins outside metro areas"),
    ("Joseph Banda et al", 2016, "Malawi", "Africa", "INFECTIOUS DISEASES", "HIV/AIDS", "Corridor districts show elevated prevalence"),
    ("Pieter de Vries et al", 2013, "Netherlands", "Europe", "LIFE STYLE DISEASES", "Cardiovascular disease", "Cycling infrastructure tracks lower risk"),
    ("Aisha Abubakar et al", 2018, "Nigeria", "Africa", "INFECTIOUS DISEASES", "Measles", "Immunization gaps visible in the northeast"),
    ("Somchai Wattana et al", 2014, "Thailand", "Asia", "INFECTIOUS DISEASES", "Dengue", "School-area breeding sites recur annually"),
    ("Claire Dubois et al", 2017, "France", "Europe", "CANCERS", "Breast cancer", "Screening participation maps onto survival"),
    ("Neema Moshi et al", 2020, "Tanzania", "Africa", "INFECTIOUS DISEASES", "Malaria", "Lake-zone endemicity persists despite nets"),
    ("Kim Min-jun et al", 2021, "South Korea", "Asia", "INFECTIOUS DISEASES", "COVID-19", "Contact networks map metropolitan spread"),
    ("Diego Fernández et al", 2019, "Argentina", "South America", "LIFE STYLE DISEASES", "Diabetes", "Provincial care access highly uneven"),
    ("Tendai Moyo et al", 2015, "Zimbabwe", "Africa", "INFECTIOUS DISEASES", "Cholera", "Borehole access inversely maps case rates"),
    ("Sabine Fischer et al", 2016, "Germany", "Europe", "CANCERS", "Colorectal cancer", "Screening invitation uptake varies by state"),
    ("Rosa Delgado et al", 2018, "Ecuador", "South America", "INFECTIOUS DISEASES", "Zika", "Lowland provinces carry the case load"),
    ("Vijay Nair et al", 2023, "India", "Asia", "RESPIRATORY DISEASES", "COPD", "Crop-burning season aligns with admissions"),
    ("Moses Okello et al", 2021, "Uganda", "Africa", "INFECTIOUS DISEASES", "Ebola", "Border districts anchor preparedness mapping"),
    ("Zhou Lin et al", 2022, "China", "Asia", "LIFE STYLE DISEASES", "Hypertension", "Northern provinces exceed control targets"),
    ("Hemi Walker et al", 2018, "New Zealand", "Australia", "RESPIRATORY DISEASES", "Asthma", "Damp housing stock flags risk suburbs"),
    ("Ahmed Hassan et al", 2020, "Turkey", "Asia", "INFECTIOUS DISEASES", "COVID-19", "Provincial waves lag the largest cities"),
    ("Sunil Perera et al", 2016, "Sri Lanka", "Asia", "INFECTIOUS DISEASES", "Dengue", "Wet-zone districts dominate notifications"),
    ("Jessica Adams et al", 2021, "United States", "North America", "RESPIRATORY DISEASES", "Asthma", "Redlined neighbourhoods show excess burden"),
    ("Carlos Medina et al", 2014, "Colombia", "South America", "INFECTIOUS DISEASES", "Malaria", "Mining frontier drives resurgence"),
    ("Farid Ismail et al", 2019, "Malaysia", "Asia", "INFECTIOUS DISEASES", "Dengue", "Construction sites recur as breeding hotspots"),
    ("Rebecca Foster et al", 2016, "USA", "North America", "CANCERS", "Prostate cancer", "Veterans cohort maps rural screening gaps"),
    ("Huang Qiang et al", 2019, "CHINA", "Asia", "INFECTIOUS DISEASES", "Schistosomiasis", "Yangtze floodplain snail habitat persists"),
    ("Selam Gebre et al", 2022, "Ethiopia", "Africa", "INFECTIOUS DISEASES", "Tuberculosis", "Pastoral regions underrepresented in notifications"),
];
