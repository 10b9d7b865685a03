pub mod a001_condominio;
