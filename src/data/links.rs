//! Built-in link catalog
//!
//! Text-to-URL substitutions applied to rendered cells. These change with
//! each release of the datasets; callers with their own catalog build a
//! [`LinkRuleTable`](crate::features::links::LinkRuleTable) instead.

use phf::phf_map;

/// Keyword that announces citation ids in a cell
pub const CITATION_KEYWORD: &str = "PubMed";

/// Citation lookup URL; the id is appended
pub const CITATION_URL: &str = "https://www.ncbi.nlm.nih.gov/pubmed/";

/// Replaced wherever they occur inside a cell
pub static SUBSTRING_LINKS: &[(&str, &str)] = &[(
    "data usage at HGD",
    "http://hymenopteragenome.org/data_usage_citing",
)];

/// Replaced only when they make up the whole cell
pub static EXACT_LINKS: phf::Map<&'static str, &'static str> = phf_map! {
    // Ontologies
    "ATOL" => "https://bioportal.bioontology.org/ontologies/ATOL",
    "BTO" => "https://bioportal.bioontology.org/ontologies/BTO",
    "CL" => "https://obophenotype.github.io/cell-ontology/",
    "CMO" => "https://bioportal.bioontology.org/ontologies/CMO",
    "ECO" => "https://bioportal.bioontology.org/ontologies/ECO",
    "EFO" => "https://www.ebi.ac.uk/efo/index.html",
    "EOL" => "https://bioportal.bioontology.org/ontologies/EOL",
    "GO" => "https://bioportal.bioontology.org/ontologies/GO",
    "HAO" => "https://bioportal.bioontology.org/ontologies/HAO",
    "HSAPDV" => "https://bioportal.bioontology.org/ontologies/HSAPDV",
    "HP" => "https://hpo.jax.org/app/data/ontology",
    "LBO" => "https://bioportal.bioontology.org/ontologies/LBO",
    "LPT" => "https://bioportal.bioontology.org/ontologies/LPT",
    "MA" => "https://bioportal.bioontology.org/ontologies/MA",
    "MONDO" => "https://mondo.monarchinitiative.org/pages/download/",
    "MI" => "https://bioportal.bioontology.org/ontologies/PSIMOD",
    "OBI" => "http://obi-ontology.org",
    "ORDO" => "https://bioportal.bioontology.org/ontologies/ORDO",
    "PATO" => "https://github.com/pato-ontology/pato/",
    "PO" => "https://bioportal.bioontology.org/ontologies/PO",
    "PSI-MI" => "https://github.com/HUPO-PSI/psi-mi-CV",
    "SO" => "https://bioportal.bioontology.org/ontologies/SO",
    "UBERON" => "https://bioportal.bioontology.org/ontologies/UBERON",
    "VT" => "https://bioportal.bioontology.org/ontologies/VT",

    // Other sources
    "Ensembl Plants BioMart Download" => "http://plants.ensembl.org/index.html",
    "GOA UniProt FTP" => "http://ftp.ebi.ac.uk/pub/databases/GO/goa/UNIPROT/goa_uniprot_all.gaf.gz",
    "GO Consortium Annotation FTP" => "http://geneontology.org/page/download-ontology",
    "GOC Download" => "http://geneontology.org/docs/download-ontology",
    "HGD" => "http://hymenopteragenome.org",
    "HGD Genome Fasta Download" => "http://hymenopteragenome.org/genome_fasta",
    "HGD GO Annotation Download" => "http://hymenopteragenome.org/hgd-go-annotation",
    "HGD OGS GFF3 Download" => "http://hymenopteragenome.org/ogs_gff3_files",
    "HGD Ortholog Download" => "http://hymenopteragenome.org/orthologs",
    "KEGG Download" => "https://www.kegg.jp/kegg/rest/keggapi.html",
    "NCBI PubMed FTP" => "https://ftp.ncbi.nlm.nih.gov/gene/DATA/gene2pubmed.gz",
    "OMIM Download" => "https://www.omim.org/downloads",
    "OrthoDB" => "https://www.orthodb.org/",
    "OrthoDB Download" => "https://data.orthodb.org/download/",
    "Plant Reactome Gramene Download" => "https://plantreactome.gramene.org/download/current/Ensembl2PlantReactome_All_Levels.txt",
    "QTL Download" => "https://www.animalgenome.org/cgi-bin/QTLdb/index",
    "Reactome Download" => "https://reactome.org/download/current/UniProt2Reactome_All_Levels.txt",
    "TreeFam Download" => "http://www.treefam.org/download",
    "UniProt FTP" => "https://ftp.uniprot.org/pub/databases/uniprot/current_release/knowledgebase/complete/",

    // Maize community datasets
    "MaizeGDB Expression Download" => "https://datacommons.cyverse.org/browse/iplant/home/maizegdb/maizegdb/MaizeGDB_qTeller_FPKM/B73v5_qTeller_FPKM",
    "Grotewold CAGE Tag Count Root Download" => "https://datacommons.cyverse.org/browse/iplant/home/maizegdb/maizegdb/B73v5_JBROWSE_AND_ANALYSES/B73v5_TSS",
    "Grotewold CAGE Tag Count Shoot Download" => "https://datacommons.cyverse.org/browse/iplant/home/maizegdb/maizegdb/B73v5_JBROWSE_AND_ANALYSES/B73v5_TSS",
    "GWAS Atlas Download" => "https://datacommons.cyverse.org/browse/iplant/home/maizegdb/maizegdb/B73v5_JBROWSE_AND_ANALYSES/B73v5_diversity_markers_and_GWAS/GWAS/SNPs_from_GWAS_Atlas_database",
    "MaizeGDB_UniformMu Download" => "https://download.maizegdb.org/Insertions/UniformMu/",
    "Stam 2017 Husk H3K9ac Enhancer Download" => "https://datacommons.cyverse.org/browse/iplant/home/maizegdb/maizegdb/B73v5_JBROWSE_AND_ANALYSES/B73v5_epigenetics_and_DNA_binding/Oka_2017_enhancer_binding/Oka_Enhancer_Husk_v5.gff",
    "Stam 2017 Seedling H3K9ac Enhancer Download" => "https://datacommons.cyverse.org/browse/iplant/home/maizegdb/maizegdb/B73v5_JBROWSE_AND_ANALYSES/B73v5_epigenetics_and_DNA_binding/Oka_2017_enhancer_binding/Oka_Enhancer_Seedling_v5.gff",
    "Vollbrecht 2010 Ac/Ds Insertions Download" => "https://download.maizegdb.org/Insertions/AcDs_Vollbrecht/",
    "Wallace 2014 GWAS Download" => "https://datacommons.cyverse.org/browse/iplant/home/maizegdb/maizegdb/B73v5_JBROWSE_AND_ANALYSES/B73v5_diversity_markers_and_GWAS/GWAS/GWAS_SNPs_from_Wallace_2014/B73v5_Wallace_etal_2014_PLoSGenet_GWAS_hits-150112_blastn.gff.gz",
};

/// Download/FTP URL prefixes and the label their links get.
/// The rule table orders these longest first.
pub static PREFIX_LINKS: &[(&str, &str)] = &[
    ("ftp://ftp.ncbi.nlm.nih.gov", "NCBI FTP"),
    ("https://ftp.ncbi.nlm.nih.gov", "NCBI FTP"),
    ("https://ftp.uniprot.org", "UniProt FTP"),
    ("https://ftp.ebi.ac.uk/pub/databases/interpro", "InterPro FTP"),
    ("ftp://ftp.ebi.ac.uk/pub/databases/IntAct", "IntAct Download"),
    ("https://ftp.ebi.ac.uk/pub/databases/IntAct", "IntAct Download"),
    ("https://ftp.ebi.ac.uk/pub/databases/eva", "EVA Download"),
    ("https://ftp.ensemblgenomes.org", "Ensembl Genomes FTP"),
    ("https://ftp.ensembl.org", "Ensembl FTP"),
    ("http://ftp.ensembl.org", "Ensembl FTP"),
    ("https://ftp.ebi.ac.uk/ensemblgenomes", "Ensembl FTP"),
    ("https://useast.ensembl.org", "Ensembl Download"),
    ("https://ftp.ensembl.org/pub/rapid-release", "Ensembl Rapid Release FTP"),
    ("https://downloads.thebiogrid.org/BioGRID", "BioGRID Download"),
    ("https://www.ncbi.nlm.nih.gov/bioproject", "NCBI BioProject"),
    ("https://data.faang.org/dataset", "FAANG Data Portal"),
    ("https://download.maizegdb.org", "MaizeGDB Download"),
    ("http://ftp.flybase.net/releases", "FlyBase Download"),
];
