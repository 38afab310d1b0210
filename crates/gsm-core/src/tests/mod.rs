mod backup_artifact;
